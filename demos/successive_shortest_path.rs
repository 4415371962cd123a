use min_cost_flow::minimum_cost_flow::graph::Graph;
use min_cost_flow::minimum_cost_flow::status::Status;
use min_cost_flow::minimum_cost_flow::successive_shortest_path::SuccessiveShortestPath;
use min_cost_flow::minimum_cost_flow::Error;

fn main() -> Result<(), Error> {
    env_logger::init();

    let mut graph = Graph::default();
    graph.add_nodes(4);

    let edges = vec![
        graph.add_directed_edge(0, 1, 0, 2, 1)?,
        graph.add_directed_edge(0, 2, 0, 1, 2)?,
        graph.add_directed_edge(1, 2, 0, 1, 1)?,
        graph.add_directed_edge(1, 3, 0, 1, 3)?,
        graph.add_directed_edge(2, 3, 0, 2, 1)?,
    ];

    graph.add_supply(0, 2)?;
    graph.add_demand(3, 2)?;

    let mut solver = SuccessiveShortestPath::default();
    match solver.solve(&mut graph)? {
        Status::Optimal => {
            println!("minimum cost:{}", graph.minimum_cost());
            for edge_id in edges {
                if let Some(edge) = graph.get_edge(edge_id) {
                    println!("{:?}", edge);
                }
            }
        }
        status => println!("{:?}", status),
    }

    Ok(())
}
