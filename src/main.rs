use std::io;

use dotenvy::dotenv;
use order_api::{build_server, create_pool, run_migrations, Config};

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env().map_err(io::Error::other)?;

    let pool = create_pool(&config.database_url, config.pool_size).map_err(io::Error::other)?;
    run_migrations(&pool).map_err(io::Error::other)?;
    log::info!("Order store at {}", config.database_url);

    log::info!("Starting server at http://{}", config.addr());
    build_server(pool, &config)?.await?;

    log::info!("Server stopped, order store closed");
    Ok(())
}
