use std::{net::SocketAddr, process::ExitCode};

use clap::Parser;
use pickupnews::{config, models::RequestParameter, routes, services::pickup_service, AppState};

#[derive(Parser, Debug)]
#[command(author, version, about = "Post news search summaries to a chat webhook", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Run once and print the resulting status
    Run {
        /// First day of the window (YYYY-MM-DD), defaults to yesterday
        #[arg(long, default_value = "")]
        from: String,
        /// Last day of the window (YYYY-MM-DD), defaults to today
        #[arg(long, default_value = "")]
        to: String,
        /// Bucket holding the keyword list
        #[arg(long, default_value = "")]
        bucket: String,
        /// Object key of the keyword list inside the bucket
        #[arg(long, default_value = "")]
        object_key: String,
        /// Inline keyword, used when no bucket/key is given
        #[arg(long, default_value = "")]
        keyword: String,
        #[arg(long, default_value_t = 0)]
        notice_lower_limit: i64,
    },
    /// Serve POST /pickup so a scheduler can trigger runs over HTTP
    Serve,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let settings = config::load();

    let state = match AppState::from_settings(settings.clone()) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!("failed to initialise: {e}");
            return ExitCode::FAILURE;
        }
    };

    match cli.command {
        Commands::Run {
            from,
            to,
            bucket,
            object_key,
            keyword,
            notice_lower_limit,
        } => {
            let params = RequestParameter {
                from,
                to,
                s3_bucket_name: bucket,
                s3_object_key: object_key,
                keyword,
                notice_lower_limit,
            };

            match pickup_service::run(&state, &params).await {
                Ok(status) => {
                    print!("{status}");
                    if !status.ends_with('\n') {
                        println!();
                    }
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    tracing::error!("pickup run failed: {e}");
                    ExitCode::FAILURE
                }
            }
        }
        Commands::Serve => {
            let host = match settings.host.parse::<std::net::IpAddr>() {
                Ok(h) => h,
                Err(e) => {
                    tracing::error!("invalid HOST {}: {e}", settings.host);
                    return ExitCode::FAILURE;
                }
            };
            let addr = SocketAddr::from((host, settings.port));

            let listener = match tokio::net::TcpListener::bind(addr).await {
                Ok(l) => l,
                Err(e) => {
                    tracing::error!("failed to bind {addr}: {e}");
                    return ExitCode::FAILURE;
                }
            };
            tracing::info!("listening on http://{}", addr);

            if let Err(e) = axum::serve(listener, routes::app(state)).await {
                tracing::error!("server error: {e}");
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
    }
}
