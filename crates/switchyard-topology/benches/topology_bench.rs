//! Benchmarks for the Switchyard topology model.
//!
//! Measures performance of:
//! - Network cost aggregation
//! - Reachability search across chain topologies

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use switchyard_topology::{find_client, network_cost, ClientId, Network, NodeId, Query};

/// Build a chain of `nodes` nodes, two clients hanging off each.
fn build_chain(nodes: u32) -> Network {
    let mut net = Network::with_entities(nodes as usize * 2, nodes as usize);
    net.assign_ids().unwrap();
    for n in 1..=nodes {
        net.connect_client(NodeId(n), ClientId(n * 2 - 1), 3, 4).unwrap();
        net.connect_client(NodeId(n), ClientId(n * 2), 5, 2).unwrap();
    }
    for n in 1..nodes {
        net.connect_nodes(NodeId(n), NodeId(n + 1), 7, 2).unwrap();
    }
    net.refresh_direct_clients();
    net
}

fn bench_network_cost(c: &mut Criterion) {
    let mut group = c.benchmark_group("network_cost");

    for &nodes in &[10u32, 100, 1000] {
        let net = build_chain(nodes);
        group.throughput(Throughput::Elements(nodes as u64));
        group.bench_with_input(BenchmarkId::from_parameter(nodes), &net, |b, net| {
            b.iter(|| network_cost(black_box(net)))
        });
    }
    group.finish();
}

fn bench_find_client(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_client");

    for &nodes in &[10u32, 100, 1000] {
        let net = build_chain(nodes);
        // Worst case: the target hangs off the far end of the chain.
        let query = Query::new(ClientId(1), ClientId(nodes * 2));
        group.throughput(Throughput::Elements(nodes as u64));
        group.bench_with_input(BenchmarkId::from_parameter(nodes), &net, |b, net| {
            b.iter(|| find_client(black_box(net), black_box(&query), NodeId(1)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_network_cost, bench_find_client);
criterion_main!(benches);
