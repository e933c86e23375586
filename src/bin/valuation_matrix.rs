use clap::Parser;
use std::{fs, path::PathBuf};
use tabled::{Table, Tabled, settings::Style};
use valuation_matrix::{RenderOptions, ValuationMatrix};

/// Inspect a valuation matrix stored as a JSON list of rows
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// JSON file holding one list of values per agent
    input: PathBuf,

    /// Comma-separated object indices to value for every agent
    #[arg(long, value_delimiter = ',')]
    bundle: Option<Vec<usize>>,

    /// Remove this agent before reporting
    #[arg(long)]
    without_agent: Option<usize>,

    /// Remove this object before reporting
    #[arg(long)]
    without_object: Option<usize>,

    /// Maximum width of a rendered matrix line
    #[arg(long, default_value_t = valuation_matrix::DEFAULT_MAX_LINE_WIDTH)]
    width: usize,
}

#[derive(Tabled)]
struct AgentSummary {
    #[tabled(rename = "Agent")]
    agent: usize,
    #[tabled(rename = "All objects")]
    total: f64,
    #[tabled(rename = "Bundle")]
    bundle: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let text = fs::read_to_string(&cli.input)?;
    let mut matrix: ValuationMatrix = serde_json::from_str(&text)?;

    if let Some(agent) = cli.without_agent {
        matrix = matrix.without_agent(agent)?;
    }
    if let Some(object) = cli.without_object {
        matrix = matrix.without_object(object)?;
    }

    println!(
        "{} agents, {} objects",
        matrix.num_of_agents(),
        matrix.num_of_objects()
    );
    let options = RenderOptions::default().with_max_line_width(cli.width);
    println!("{}", matrix.render(&options));

    let mut summaries = Vec::with_capacity(matrix.num_of_agents());
    for row in matrix.rows() {
        let bundle = match cli.bundle.as_deref() {
            Some(objects) => matrix
                .agent_value_for_bundle(row.agent(), Some(objects))?
                .to_string(),
            None => "-".to_string(),
        };
        summaries.push(AgentSummary {
            agent: row.agent(),
            total: row.sum(),
            bundle,
        });
    }

    let mut table = Table::new(summaries);
    table.with(Style::modern());
    println!("{table}");

    Ok(())
}
