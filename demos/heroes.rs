use dota_webapi::{DotaAPI, enums::Language};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    let api_key = std::env::var("API_KEY").expect("API_KEY missing");
    let api = DotaAPI::builder(api_key)
        .language(Language::German)
        .build();
    let heroes = api.get_heroes().await?;

    for hero in heroes.iter() {
        println!("#{} {}", hero.id, hero.localized_name.as_deref().unwrap_or_default());
    }

    Ok(())
}
