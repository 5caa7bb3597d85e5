//! Register an agent and look up its reputation.
//!
//! Reads `AGENTID_API_KEY` (and optionally `AGENTID_BASE_URL`) from the
//! environment or a `.env` file:
//!
//! ```text
//! AGENTID_API_KEY=your_key cargo run --example register_agent
//! ```

use agentid_client::AgentIdClient;
use agentid_client::types::ActionStatus;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    env_logger::init();

    let Some(client) = AgentIdClient::from_env() else {
        eprintln!("AGENTID_API_KEY is not set");
        std::process::exit(1);
    };

    let agent = match client
        .register("ExampleBot", "A demo agent", Some(vec!["chat".to_string()]))
        .await
    {
        Ok(agent) => agent,
        Err(e) => {
            eprintln!("registration failed: {}", e);
            std::process::exit(1);
        }
    };
    println!("registered: {}", agent);

    let Some(agent_id) = agent.get("id").and_then(|v| v.as_str()) else {
        eprintln!("service response has no agent id");
        std::process::exit(1);
    };

    if let Err(e) = client
        .log_action(agent_id, "demo", ActionStatus::Success.as_str(), None)
        .await
    {
        eprintln!("action logging failed: {}", e);
    }

    match client.get_reputation(agent_id).await {
        Ok(reputation) => println!("reputation: {}", reputation),
        Err(e) => eprintln!("reputation lookup failed: {}", e),
    }
}
