use valuation_matrix::ValuationMatrix;

fn main() {
    // Two agents valuing three objects
    let v = ValuationMatrix::new([[1, 4, 7], [6, 3, 0]]).expect("rows are rectangular");
    println!("{v}");

    for agent in v.agents() {
        let row = v.agent_values(agent).expect("agent comes from agents()");
        println!("Agent {agent}: {:?}, total {}", row.to_vec(), row.sum());
    }

    let bundle: [usize; 2] = [0, 2];
    for agent in v.agents() {
        match v.agent_value_for_bundle(agent, Some(&bundle)) {
            Ok(value) => println!("Agent {agent} values bundle {bundle:?} at {value}"),
            Err(e) => eprintln!("Error valuing bundle: {e}"),
        }
    }

    // Allocate object 2 to agent 0 and recurse on the rest
    match v.without_agent(0).and_then(|rest| rest.without_object(2)) {
        Ok(rest) => println!("Remaining problem:\n{rest}"),
        Err(e) => eprintln!("Error reducing matrix: {e}"),
    }

    if let Err(e) = v.agent_value_for_bundle(0, Some(&[5])) {
        println!("Out of range bundle: {e}");
    }
}
