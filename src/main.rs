use std::process::exit;
use clap::Parser;
use log::{error, info, warn};
use tokio::runtime::Builder;
use tilecache_redis::cache::structs::tile_cache_redis::TileCacheRedis;
use tilecache_redis::cache::traits::tile_cache::TileCache;
use tilecache_redis::config::structs::configuration::Configuration;
use tilecache_redis::logging::setup_logging;
use tilecache_redis::structs::{Cli, Commands};
use tilecache_redis::tile::structs::tile_image::TileImage;
use tilecache_redis::tile::structs::tile_request::TileRequest;

fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    let config = match Configuration::load_from_file(&args.config, args.create_config) {
        Ok(config) => config,
        Err(_) => exit(101)
    };

    if let Err(e) = setup_logging(&config) {
        eprintln!("[ERROR] {}", e);
        exit(101);
    }

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let code = Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let cache = match TileCacheRedis::construct(&config.cache, &config.error_messages).await {
                Ok(cache) => cache,
                Err(e) => {
                    error!("[BOOT] Unable to construct the tile cache: {}", e);
                    return 101;
                }
            };

            match args.command.unwrap_or(Commands::Check) {
                Commands::Check => match cache.ping().await {
                    Ok(_) => {
                        info!("[CHECK] {} is reachable (prefix '{}', ttl {}s)", cache.topology(), cache.config().key_prefix, cache.config().ttl);
                        0
                    }
                    Err(e) => {
                        error!("[CHECK] Ping failed: {}", e);
                        1
                    }
                },
                Commands::Get { layer, z, x, y, output } => {
                    let request = TileRequest::new(&layer, z, x, y);
                    match cache.lookup(&request).await {
                        Ok(image) => match std::fs::write(&output, &image.content) {
                            Ok(_) => {
                                info!("[GET] {} -> {} ({} bytes, {})", request, output, image.len(), image.content_type);
                                0
                            }
                            Err(e) => {
                                error!("[GET] Unable to write {}: {}", output, e);
                                1
                            }
                        },
                        Err(e) if e.is_miss() => {
                            warn!("[GET] {} is not cached", cache.key_for(&request));
                            1
                        }
                        Err(e) => {
                            error!("[GET] Lookup failed: {}", e);
                            1
                        }
                    }
                }
                Commands::Put { layer, z, x, y, input, content_type } => {
                    let request = TileRequest::new(&layer, z, x, y);
                    let content = match std::fs::read(&input) {
                        Ok(content) => content,
                        Err(e) => {
                            error!("[PUT] Unable to read {}: {}", input, e);
                            return 1;
                        }
                    };
                    let image = TileImage::new(content, &content_type);
                    match cache.save(&request, &image).await {
                        Ok(_) => {
                            info!("[PUT] {} <- {} ({} bytes)", cache.key_for(&request), input, image.len());
                            0
                        }
                        Err(e) => {
                            error!("[PUT] Save failed: {}", e);
                            1
                        }
                    }
                }
            }
        });

    exit(code)
}
