//! Switchyard demo binary
//!
//! Seeds the demonstration network, prints its reports, and routes a
//! client-to-client query across the node graph.

use switchyard_report::{network_report, node_report, NetworkSnapshot};
use switchyard_topology::{loader, ClientId, Query};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "switchyard=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let network = loader::demo_network()?;
    tracing::info!(
        clients = network.client_count(),
        nodes = network.node_count(),
        "network assembled"
    );

    print!("{}", network_report(&network));
    for node in network.nodes() {
        print!("{}", node_report(&network, node.id())?);
    }

    let query = Query::new(ClientId(4), ClientId(5)).with_message("ping");
    query.validate()?;
    match network.route_query(&query)? {
        Some(client) => {
            tracing::info!(client = %client.id(), resource = %client.resource, "route found")
        }
        None => tracing::warn!(from = %query.from, to = %query.to, "route denied"),
    }

    if std::env::var_os("SWITCHYARD_DUMP_JSON").is_some() {
        println!("{}", NetworkSnapshot::capture(&network).to_json()?);
    }

    Ok(())
}
