// Memory Album
// Main entry point: prints the themed front page, anniversary countdown and cover tint

use std::path::PathBuf;

use anyhow::Result;
use memory_album::services::color::ColorCache;
use memory_album::services::settings::SettingsService;

const COLOR_CACHE_FILE_NAME: &str = "cover_colors.json";

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Memory Album");

    let service = match std::env::args().nth(1) {
        Some(path) => SettingsService::new(PathBuf::from(path)),
        None => SettingsService::at_default_location(),
    };
    let settings = service.load()?;
    let theme = settings.resolved_theme();

    for line in theme.front_page(settings.book_opened) {
        println!("{}", line);
    }

    if let Some(url) = settings.cover_image_url.as_deref() {
        let cache_path = service.path().with_file_name(COLOR_CACHE_FILE_NAME);
        let cache = ColorCache::load_snapshot(&cache_path);

        let tint = settings.cover_tint(url, &cache).await;
        println!(
            "Cover background {} (text {}, secondary {})",
            tint.background, tint.text, tint.muted_text
        );

        if let Err(err) = cache.save_snapshot(&cache_path) {
            log::warn!("Failed to persist colour cache: {err:?}");
        }
    }

    let mut ticker = settings.start_ticker();
    let status = ticker.latest();
    println!("{}", theme.countdown_message(&status));

    // Nothing changes without the user fixing their settings.
    if status.remaining().is_none() {
        ticker.stop();
        return Ok(());
    }

    let mut updates = ticker.subscribe();
    loop {
        tokio::select! {
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                let status = updates.borrow_and_update().clone();
                println!("{}", theme.countdown_message(&status));
            }
            _ = tokio::signal::ctrl_c() => {
                break;
            }
        }
    }

    ticker.stop();
    log::info!("Memory Album stopped");
    Ok(())
}
