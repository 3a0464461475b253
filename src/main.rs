use anyhow::Result;
use axum::Router;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use ambulance_dispatch::config::environment::EnvironmentConfig;
use ambulance_dispatch::database::DatabaseConnection;
use ambulance_dispatch::middleware::cors::{cors_middleware, cors_middleware_with_origins};
use ambulance_dispatch::routes;
use ambulance_dispatch::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Charger les variables d'environnement
    dotenv().ok();

    // Configurer le logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🚑 Ambulance Dispatch - API de régulation");
    info!("=========================================");

    let config = EnvironmentConfig::from_env();

    // Initialiser la base de données
    let db_connection = match DatabaseConnection::new_default().await {
        Ok(conn) => conn,
        Err(e) => {
            error!("❌ Erreur de connexion à la base de données: {}", e);
            return Err(anyhow::anyhow!("Erreur de base de données: {}", e));
        }
    };

    let pool = db_connection.pool().clone();
    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;

    // CORS permissif en développement, liste d'origins en production
    let cors = if config.is_production() {
        cors_middleware_with_origins(config.cors_origins.clone())
    } else {
        cors_middleware()
    };

    let app_state = AppState::new(pool, config);

    // Assembler le router de l'API
    let app = Router::new()
        .merge(routes::create_health_router())
        .nest(
            "/api/auth",
            routes::auth_routes::create_auth_router(app_state.clone()),
        )
        .nest(
            "/api/ambulances",
            routes::ambulance_routes::create_ambulance_router(app_state.clone()),
        )
        .nest(
            "/api/missions",
            routes::mission_routes::create_mission_router(app_state.clone()),
        )
        .nest(
            "/api/hospitals",
            routes::hospital_routes::create_hospital_router(app_state.clone()),
        )
        .nest(
            "/api/personnel",
            routes::personnel_routes::create_personnel_router(app_state.clone()),
        )
        .nest(
            "/api/users",
            routes::user_routes::create_user_router(app_state.clone()),
        )
        .nest(
            "/api/maintenance",
            routes::maintenance_routes::create_maintenance_router(app_state),
        )
        .layer(cors);

    info!("🌐 Serveur démarré sur http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Liveness check");
    info!("🔐 Auth:");
    info!("   POST /api/auth/login - Login");
    info!("   GET  /api/auth/me - Utilisateur courant");
    info!("🚑 Ambulances:");
    info!("   GET  /api/ambulances - Lister (paginé)");
    info!("   GET  /api/ambulances/available - Ambulances disponibles");
    info!("   GET  /api/ambulances/:id - Détail");
    info!("   POST /api/ambulances - Créer");
    info!("   PUT  /api/ambulances/:id - Mettre à jour");
    info!("   PUT  /api/ambulances/:id/location - Rapporter la position");
    info!("   PUT  /api/ambulances/:id/status - Changer le statut");
    info!("   DELETE /api/ambulances/:id - Supprimer");
    info!("🚨 Missions:");
    info!("   GET  /api/missions - Lister (paginé)");
    info!("   GET  /api/missions/active - Missions actives");
    info!("   GET  /api/missions/status/:status - Par statut");
    info!("   GET  /api/missions/:id - Détail");
    info!("   POST /api/missions - Créer");
    info!("   PUT  /api/missions/:id - Mettre à jour");
    info!("   POST /api/missions/:id/assign - Assigner ambulance/équipe");
    info!("   PUT  /api/missions/:id/status - Faire avancer le statut");
    info!("   DELETE /api/missions/:id - Supprimer");
    info!("🏥 Hôpitaux: /api/hospitals (+ /active)");
    info!("👥 Personnel: /api/personnel (+ /available)");
    info!("👤 Utilisateurs: /api/users (admin)");
    info!("🔧 Maintenance: /api/maintenance (+ /ambulance/:id)");

    // Démarrer le serveur avec arrêt graceful
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Erreur du serveur: {}", e);
            e
        })?;

    info!("👋 Serveur arrêté");
    Ok(())
}

/// Signal d'arrêt graceful (Ctrl+C ou SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Signal Ctrl+C reçu, arrêt du serveur...");
        },
        _ = terminate => {
            info!("🛑 Signal de terminaison reçu, arrêt du serveur...");
        },
    }
}
