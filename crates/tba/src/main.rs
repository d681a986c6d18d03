use anyhow::{bail, Context};
use tracing::info;

use tba_client::{BotClient, GetUpdatesOptions, SendMessageOptions};
use tba_core::{config::Config, inbound::InboundUpdate, types::InputFile};

const USAGE: &str = "usage: tba <me | updates [offset] | echo | webhook <url> [certificate]>";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tba_core::logging::init("tba")?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(command) = args.first() else {
        bail!(USAGE);
    };

    let cfg = Config::load()?;
    info!(api = %cfg.api_base_url, "telegram client configured");

    let result = match command.as_str() {
        "me" => BotClient::from_config(cfg)?.get_me().await?,
        "updates" => {
            let offset = args
                .get(1)
                .map(|s| s.parse::<i64>())
                .transpose()
                .context("offset must be an integer")?;
            BotClient::from_config(cfg)?
                .get_updates(GetUpdatesOptions {
                    offset,
                    ..Default::default()
                })
                .await?
        }
        "echo" => {
            // Webhook receiver: the update body arrives on stdin.
            let update = InboundUpdate::from_reader(std::io::stdin().lock())?;
            let client = BotClient::from_config(cfg)?.with_inbound_update(update);
            let chat_id = client.chat_id()?;
            let text = client.message_text()?;
            info!(chat_id = chat_id.0, "echoing inbound message");
            client
                .send_message(chat_id, text, SendMessageOptions::default())
                .await?
        }
        "webhook" => {
            let url = args.get(1).cloned().unwrap_or_default();
            let certificate = args.get(2).map(InputFile::path);
            BotClient::from_config(cfg)?
                .set_webhook(url, certificate)
                .await?
        }
        other => bail!("unknown command {other:?}\n{USAGE}"),
    };

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
