// region:    --- Imports
use item_listing_service::config::Config;
use item_listing_service::database::DatabaseManager;
use item_listing_service::routes::{self, AppState};
use item_listing_service::store::{InMemoryItemStore, PostgresItemStore};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info, warn};
// endregion: --- Imports

// region:    --- Main
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // logging 초기화
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .without_time()
        .with_target(false)
        .init();

    let config = Config::from_env().map_err(|e| {
        error!("{:<12} --> 설정 로드 실패: {}", "Main", e);
        e
    })?;

    // 저장소 생성 (프로세스당 한 번)
    let (store, db_manager): (AppState, Option<Arc<DatabaseManager>>) =
        match config.database_url.as_deref() {
            Some(url) => {
                let db_manager = Arc::new(
                    DatabaseManager::new(url, config.max_connections, config.acquire_timeout)
                        .await?,
                );
                if let Err(e) = db_manager.initialize_database().await {
                    error!("{:<12} --> 데이터베이스 초기화 실패: {:?}", "Main", e);
                    return Err(e.into());
                }
                info!("{:<12} --> 데이터베이스 초기화 성공", "Main");
                let store: AppState = Arc::new(PostgresItemStore::new(Arc::clone(&db_manager)));
                (store, Some(db_manager))
            }
            None => {
                warn!(
                    "{:<12} --> DATABASE_URL 미설정: 인메모리 저장소 사용 (재시작 시 데이터 소멸)",
                    "Main"
                );
                let store: AppState = Arc::new(InMemoryItemStore::new());
                (store, None)
            }
        };

    let routes_all = routes::routes(store);

    let listener = TcpListener::bind(config.bind_addr).await?;
    info!(
        "{:<12} --> Web Server: Listening on {}",
        "Main",
        listener.local_addr()?
    );

    // 서버 실행
    if let Err(err) = axum::serve(listener, routes_all.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("{:<12} --> Server error: {}", "Main", err);
    }

    if let Some(db_manager) = db_manager {
        db_manager.close().await;
    }
    info!("{:<12} --> 서버 종료", "Main");
    Ok(())
}

/// Ctrl-C 또는 SIGTERM 대기
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("{:<12} --> Ctrl-C 핸들러 설치 실패: {}", "Main", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("{:<12} --> SIGTERM 핸들러 설치 실패: {}", "Main", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("{:<12} --> 종료 신호 수신", "Main");
}
// endregion: --- Main
