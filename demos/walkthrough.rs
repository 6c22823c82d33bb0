//! digraph 演示
//!
//! 构建示例图并依次执行遍历、环检测和最短路径
//!
//! 运行: `cargo run --example walkthrough -- --strategy priority-queue`

use anyhow::Context;
use clap::Parser;
use digraph::{EnqueuePolicy, Graph, GraphConfig, ShortestPathStrategy};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "walkthrough")]
#[command(about = "digraph 演示")]
struct Args {
    /// 最短路径策略（linear / priority-queue）
    #[arg(short, long, default_value = "linear")]
    strategy: ShortestPathStrategy,

    /// BFS 去重策略（dequeue / enqueue）
    #[arg(short, long, default_value = "dequeue")]
    bfs_policy: EnqueuePolicy,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("digraph=info")),
        )
        .with_target(false)
        .init();

    let args = Args::parse();
    let config = GraphConfig::new()
        .with_shortest_path(args.strategy)
        .with_bfs_policy(args.bfs_policy);

    println!("digraph 演示");
    println!("============");
    println!("最短路径策略: {}", config.shortest_path);
    println!("BFS 策略: {}\n", config.bfs_policy);

    // 1. 带权有向无环图
    println!("1. 带权图");
    let mut graph = Graph::with_config(config);
    for v in 1..=4 {
        graph.add_node(v)?;
    }
    graph.add_edge(1, 2, Some(1.0))?;
    graph.add_edge(2, 3, Some(1.0))?;
    graph.add_edge(1, 3, Some(5.0))?;
    graph.add_edge(3, 4, Some(1.0))?;
    print!("{}", graph);

    println!("   是否有环: {}", graph.is_cyclic());
    println!("   DFS: {:?}", graph.depth_first_search(1)?);
    println!("   BFS: {:?}", graph.breadth_first_search(1)?);

    let path = graph
        .shortest_path(1, 4)?
        .context("1 到 4 应当可达")?;
    println!(
        "   最短路径 1 -> 4: {:?}（{} 跳，总权重 {}）",
        path.nodes, path.length, path.total_weight
    );

    match graph.shortest_path(4, 1)? {
        Some(p) => println!("   最短路径 4 -> 1: {:?}", p.nodes),
        None => println!("   最短路径 4 -> 1: 不可达"),
    }
    println!();

    // 2. 无权环
    println!("2. 环");
    let mut ring = Graph::with_config(config);
    for v in 1..=3 {
        ring.add_node(v)?;
    }
    ring.add_edge(1, 2, None)?;
    ring.add_edge(2, 3, None)?;
    ring.add_edge(3, 1, None)?;
    print!("{}", ring);

    println!("   是否有环: {}", ring.is_cyclic());
    println!("   环: {:?}", ring.find_cycle());
    println!("   DFS: {:?}", ring.depth_first_search(1)?);
    println!("   BFS: {:?}", ring.breadth_first_search(1)?);
    if let Some(p) = ring.shortest_path(1, 3)? {
        println!("   最短路径 1 -> 3: {:?}", p.nodes);
    }

    // 3. 删除节点后环消失
    ring.remove_node(2);
    println!("   删除节点 2 后是否有环: {}", ring.is_cyclic());
    print!("{}", ring);

    // 4. 错误
    println!("\n3. 错误处理");
    if let Err(e) = graph.add_node(1) {
        println!("   {}", e);
    }
    if let Err(e) = graph.depth_first_search(42) {
        println!("   {}", e);
    }

    println!("\n演示完成!");
    Ok(())
}
