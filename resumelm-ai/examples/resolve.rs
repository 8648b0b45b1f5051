//! Resolve a model against the current environment.
//!
//! ```bash
//! OPENAI_API_KEY=sk-... cargo run --example resolve -- gpt-4o-mini
//! cargo run --example resolve -- --pro claude-sonnet-4-20250514
//! RESUMELM_API_KEYS='[{"service":"openai","key":"sk-..."}]' cargo run --example resolve -- gpt-4.1
//! ```

use resumelm_ai::prelude::*;

fn main() -> anyhow::Result<()> {
    resumelm_ai::init_tracing();

    let mut is_pro = false;
    let mut model = None;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--pro" => is_pro = true,
            other => model = Some(other.to_string()),
        }
    }

    let resolver = ClientResolver::from_env();
    println!("Server environment: {:?}", resolver.env());

    let config = model.map(|model| {
        StoredPreferences::new(Some(model), std::env::var("RESUMELM_API_KEYS").ok()).into_config()
    });

    println!("\nModels:");
    for group in group_models_by_provider() {
        println!("  {}", group.name);
        for m in group.models {
            let keys = config.as_ref().map(|c| c.api_keys.as_slice()).unwrap_or(&[]);
            let availability = resolver.env().check_model_availability(m.id, is_pro, keys);
            println!(
                "    {:<32} {}",
                m.id,
                serde_json::to_string(&availability)?
            );
        }
    }

    match resolver.initialize_ai_client(config.as_ref(), is_pro, false) {
        Ok(client) => {
            println!("\nResolved {} via {}", client.identifier(), client.base_url());
            println!("Credential: {:?}", client.origin());
        }
        Err(e) => {
            tracing::error!(error = %e, "Resolution failed");
            println!("\n{}", e.user_message());
        }
    }

    Ok(())
}
