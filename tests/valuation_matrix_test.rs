use faer::Mat;
use valuation_matrix::{ValuationInput, ValuationMatrix};

fn create_basic_matrix() -> ValuationMatrix {
    ValuationMatrix::new(vec![vec![1, 4, 7], vec![6, 3, 0]]).unwrap()
}

/// Deterministic pseudo-random matrix with mixed signs and fractions
fn create_generated_matrix(n_agents: usize, n_objects: usize) -> ValuationMatrix {
    let values = Mat::from_fn(n_agents, n_objects, |i, j| {
        ((i * 31 + j * 17) % 23) as f64 / 4.0 - 2.0
    });
    ValuationMatrix::new(values).unwrap()
}

#[test]
fn test_scenario_indexing() {
    let m = create_basic_matrix();
    assert_eq!(m[(0, 1)], 4.0);
    assert_eq!(m.agent_values(0).unwrap(), [1.0, 4.0, 7.0]);
    assert_eq!(m.num_of_agents(), 2);
    assert_eq!(m.num_of_objects(), 3);
    assert_eq!(m.to_string(), "[[1 4 7]\n [6 3 0]]");

    let rows: Vec<Vec<f64>> = m.agents().map(|a| m.agent_values(a).unwrap().to_vec()).collect();
    assert_eq!(rows, vec![vec![1.0, 4.0, 7.0], vec![6.0, 3.0, 0.0]]);
}

#[test]
fn test_scenario_bundles() {
    let m = create_basic_matrix();
    assert_eq!(m.agent_value_for_bundle(0, Some(&[0, 2])).unwrap(), 8.0);
    assert_eq!(m.agent_value_for_bundle(1, Some(&[1, 0])).unwrap(), 9.0);
    assert_eq!(m.agent_value_for_bundle(1, None).unwrap(), 0.0);
}

#[test]
fn test_scenario_reductions() {
    let m = create_basic_matrix();

    let without_first = m.without_agent(0).unwrap();
    assert_eq!(without_first.num_of_agents(), 1);
    assert_eq!(without_first.num_of_objects(), 3);
    assert!(without_first.equals(&ValuationMatrix::new([[6, 3, 0]]).unwrap()));
    assert_eq!(without_first.to_string(), "[[6 3 0]]");

    let without_middle = m.without_object(1).unwrap();
    assert!(without_middle.equals(&ValuationMatrix::new([[1, 7], [6, 0]]).unwrap()));
    assert_eq!(without_middle.to_string(), "[[1 7]\n [6 0]]");
}

#[test]
fn test_scenario_dense_ones() {
    let m = ValuationMatrix::new(Mat::from_fn(2, 3, |_, _| 1.0)).unwrap();
    assert_eq!(m.shape(), (2, 3));
    assert!(m.rows().all(|row| row.iter().all(|v| v == 1.0)));
    assert_eq!(m.to_string(), "[[1 1 1]\n [1 1 1]]");
}

#[test]
fn test_empty_bundle_matches_missing_bundle() {
    let m = create_generated_matrix(4, 6);
    for agent in m.agents() {
        assert_eq!(
            m.agent_value_for_bundle(agent, None).unwrap(),
            m.agent_value_for_bundle(agent, Some(&[])).unwrap()
        );
    }
}

#[test]
fn test_bundle_value_is_sum_of_values() {
    let m = create_generated_matrix(4, 6);
    let bundles: [&[usize]; 4] = [&[0], &[1, 3, 5], &[2, 2, 4], &[5, 4, 3, 2, 1, 0]];

    for agent in m.agents() {
        for bundle in bundles {
            let expected: f64 = bundle.iter().map(|&o| m[(agent, o)]).sum();
            assert_eq!(m.agent_value_for_bundle(agent, Some(bundle)).unwrap(), expected);
        }
    }
}

#[test]
fn test_reductions_update_counts() {
    let m = create_generated_matrix(4, 6);

    for agent in m.agents() {
        let reduced = m.without_agent(agent).unwrap();
        assert_eq!(reduced.num_of_agents(), m.num_of_agents() - 1);
        assert_eq!(reduced.num_of_objects(), m.num_of_objects());
    }

    for object in m.objects() {
        let reduced = m.without_object(object).unwrap();
        assert_eq!(reduced.num_of_objects(), m.num_of_objects() - 1);
        assert_eq!(reduced.num_of_agents(), m.num_of_agents());
    }
}

#[test]
fn test_reductions_keep_remaining_values() {
    let m = create_generated_matrix(4, 6);

    let reduced = m.without_agent(2).unwrap();
    for (new_agent, old_agent) in [0, 1, 3].into_iter().enumerate() {
        assert_eq!(
            reduced.agent_values(new_agent).unwrap(),
            m.agent_values(old_agent).unwrap()
        );
    }

    let reduced = m.without_object(0).unwrap();
    for agent in m.agents() {
        for object in reduced.objects() {
            assert_eq!(reduced[(agent, object)], m[(agent, object + 1)]);
        }
    }
}

#[test]
fn test_reductions_do_not_mutate_source() {
    let m = create_basic_matrix();
    let original_copy = ValuationMatrix::new(m.to_rows()).unwrap();

    let _ = m.without_agent(0).unwrap();
    let _ = m.without_object(2).unwrap();

    assert!(m.equals(&original_copy));
    assert_eq!(m.shape(), (2, 3));
}

#[test]
fn test_equals_reflexive_and_symmetric() {
    let m = create_generated_matrix(3, 5);
    let same = ValuationMatrix::new(m.to_rows()).unwrap();
    let different = m.without_object(4).unwrap();

    assert!(m.equals(&m));
    assert!(m.equals(&same));
    assert!(same.equals(&m));
    assert!(!m.equals(&different));
    assert!(!different.equals(&m));
}

#[test]
fn test_all_sources_construct_equal_matrices() {
    let rows = vec![vec![1.0, 4.0, 7.0], vec![6.0, 3.0, 0.0]];
    let dense = Mat::from_fn(2, 3, |i, j| rows[i][j]);

    let from_rows = ValuationMatrix::new(rows.clone()).unwrap();
    let from_dense = ValuationMatrix::new(&dense).unwrap();
    let from_matrix = ValuationMatrix::new(&from_rows).unwrap();
    let from_enum = ValuationMatrix::new(ValuationInput::Dense(dense)).unwrap();
    let from_try = ValuationMatrix::try_from(rows).unwrap();

    for m in [&from_dense, &from_matrix, &from_enum, &from_try] {
        assert_eq!(*m, from_rows);
    }
    assert!(from_matrix.shares_storage_with(&from_rows));
    assert!(!from_dense.shares_storage_with(&from_rows));
}

#[test]
fn test_matrix_is_shareable_across_threads() {
    let m = create_generated_matrix(3, 4);
    let handles: Vec<_> = m
        .agents()
        .map(|agent| {
            let m = m.clone();
            std::thread::spawn(move || m.agent_value_for_objects(agent, m.objects()).unwrap())
        })
        .collect();

    for (agent, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), m.agent_values(agent).unwrap().sum());
    }
}
