use dota_webapi::{DotaAPI, response::Player};

fn describe(player: &Player) -> String {
    let hero = player.hero.localized_name
        .as_deref()
        .unwrap_or("Unknown hero");
    let items = player.items
        .iter()
        .filter_map(|item| item.localized_name.as_deref())
        .collect::<Vec<_>>();

    format!(
        "{hero} {}/{}/{} {:?}",
        player.stats.kills,
        player.stats.deaths,
        player.stats.assists,
        items,
    )
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    let api_key = std::env::var("API_KEY").expect("API_KEY missing");
    let match_id = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse::<u64>().ok())
        .unwrap_or(4176987886);
    let api = DotaAPI::builder(api_key).build();
    let details = api.get_match_details(match_id).await?;

    if details.error {
        println!("Match #{match_id}: {}", details.error_message.unwrap_or_default());
        return Ok(());
    }

    let heroes = api.get_heroes().await?;
    let items = api.get_game_items().await?;
    let details = details.with_metadata(&heroes, &items);

    println!("Match #{} won by {:?}", details.match_id, details.winner());

    for player in &details.players {
        println!("{}: {}", player.team(), describe(player));
    }

    Ok(())
}
