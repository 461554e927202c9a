pub mod health;
pub mod modules;
pub mod shared;

use crate::modules::account::adapter::outgoing::security::{
    bcrypt_hasher::BcryptHasher, random_credentials::RandomCredentials,
};
use crate::modules::account::adapter::outgoing::{AccountQueryPostgres, AccountRepositoryPostgres};
use crate::modules::account::application::account_use_cases::AccountUseCases;
use crate::modules::account::application::ports::outgoing::{CredentialGenerator, PasswordHasher};
use crate::modules::account::application::use_cases::{
    activate_account::{ActivateAccountUseCase, IActivateAccountUseCase},
    change_password::ChangePasswordUseCase,
    create_account::CreateAccountUseCase,
    delete_account::DeleteAccountUseCase,
    get_account::GetAccountUseCase,
    get_profile::GetProfileUseCase,
    list_accounts::ListAccountsUseCase,
    register_account::RegisterAccountUseCase,
    request_activation::RequestActivationUseCase,
    request_password_reset::RequestPasswordResetUseCase,
    reset_password::ResetPasswordUseCase,
    resolve_oauth_account::{IResolveOAuthAccountUseCase, ResolveOAuthAccountUseCase},
    toggle_ban::ToggleBanUseCase,
    update_profile::UpdateProfileUseCase,
};

use crate::modules::auth::adapter::incoming::web::middleware::{AuthGuard, RoutePolicies};
use crate::modules::auth::adapter::outgoing::google_oauth_client::{
    GoogleOAuthClient, GoogleOAuthConfig,
};
use crate::modules::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::modules::auth::adapter::outgoing::redis_refresh_token_store::RedisRefreshTokenStore;
use crate::modules::auth::application::auth_use_cases::AuthUseCases;
use crate::modules::auth::application::orchestrator::{
    ActivationLoginOrchestrator, OAuthLoginOrchestrator,
};
use crate::modules::auth::application::ports::outgoing::{RefreshTokenStore, TokenProvider};
use crate::modules::auth::application::services::SessionService;
use crate::modules::auth::application::use_cases::{
    login::LoginUseCase, logout::LogoutUseCase, refresh_session::RefreshSessionUseCase,
};

use crate::modules::email::adapter::outgoing::mock_sender::MockEmailSender;
use crate::modules::email::adapter::outgoing::smtp_sender::SmtpEmailSender;
use crate::modules::email::application::ports::outgoing::{AccountEmailNotifier, EmailSender};
use crate::modules::email::application::services::{AccountEmailService, BackgroundEmailNotifier};

use crate::modules::ingredient::adapter::outgoing::{
    IngredientQueryPostgres, IngredientRepositoryPostgres,
};
use crate::modules::ingredient::application::ingredient_use_cases::IngredientUseCases;
use crate::modules::ingredient::application::services::{
    CreateIngredientsService, GetIngredientsService, RemoveIngredientsService,
};
use crate::modules::recipe::adapter::outgoing::{RecipeQueryPostgres, RecipeRepositoryPostgres};
use crate::modules::recipe::application::recipe_use_cases::RecipeUseCases;
use crate::modules::recipe::application::services::{CreateRecipeService, GetRecipesService};
use crate::modules::tag::adapter::outgoing::{TagQueryPostgres, TagRepositoryPostgres};
use crate::modules::tag::application::services::{
    CreateTagsService, GetTagsService, RemoveTagsService,
};
use crate::modules::tag::application::tag_use_cases::TagUseCases;
use crate::shared::api::{custom_json_config, custom_path_config, custom_query_config};

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use deadpool_redis::{Config, Runtime};

use sea_orm::{ConnectOptions, Database};
use std::env;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub account: AccountUseCases,
    pub auth: AuthUseCases,
    pub tag: TagUseCases,
    pub ingredient: IngredientUseCases,
    pub recipe: RecipeUseCases,
    /// Front-end page that receives the tokens after Google sign-in.
    pub client_login_url: String,
}

#[cfg(not(tarpaulin_include))]
fn email_sender(env_name: &str) -> Arc<dyn EmailSender + Send + Sync> {
    let from_email = env::var("EMAIL_FROM").expect("EMAIL_FROM not set");

    if env_name == "test" {
        // Local Mailpit
        let host = env::var("SMTP_HOST").unwrap_or_else(|_| "localhost".to_string());
        let port: u16 = env::var("SMTP_PORT")
            .unwrap_or_else(|_| "1025".to_string())
            .parse()
            .expect("Invalid SMTP_PORT");
        return Arc::new(SmtpEmailSender::new_local(&host, port, &from_email));
    }

    match env::var("SMTP_SERVER") {
        Ok(smtp_server) => {
            let smtp_user = env::var("SMTP_USERNAME").expect("SMTP_USERNAME not set");
            let smtp_pass = env::var("SMTP_PASSWORD").expect("SMTP_PASSWORD not set");
            let sender = SmtpEmailSender::new(&smtp_server, &smtp_user, &smtp_pass, &from_email)
                .expect("Invalid SMTP_SERVER");
            Arc::new(sender)
        }
        Err(_) if env_name == "production" => panic!("SMTP_SERVER not set"),
        Err(_) => {
            tracing::warn!("SMTP_SERVER not set; outgoing mail is kept in memory");
            Arc::new(MockEmailSender::new())
        }
    }
}

#[cfg(not(tarpaulin_include))]
fn cors(origins: &[String]) -> Cors {
    let cors = Cors::default()
        .allowed_methods(vec!["GET", "HEAD", "PUT", "PATCH", "POST", "DELETE"])
        .allow_any_header()
        .supports_credentials()
        .max_age(3600);

    if origins.is_empty() {
        cors.allow_any_origin()
    } else {
        origins
            .iter()
            .fold(cors, |cors, origin| cors.allowed_origin(origin))
    }
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Process-wide TLS provider for the Redis and Google clients.
    let _ = rustls::crypto::ring::default_provider().install_default();

    info!("Starting application...");

    // Try .env.{environment} first, then fall back to .env
    let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    let env_file = format!(".env.{}", env_name);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL is not set in .env file");
    let host = env::var("HOST").expect("HOST is not set in .env file");
    let port = env::var("PORT").expect("PORT is not set in .env file");
    let redis_url = env::var("REDIS_URL").expect("REDIS_URL is not set in .env file");
    let client_login_url = env::var("CLIENT_URL_GG_LOGIN").unwrap_or_default();
    let cors_origins: Vec<String> = env::var("CORS_ORIGINS")
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(str::to_string)
        .collect();

    let server_url = format!("{host}:{port}");
    info!("Server run on: {}", server_url);

    // Database connection
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .expect("Failed to connect to database");
    let db_arc = Arc::new(conn);

    // Redis connection
    let redis_pool = Config::from_url(&redis_url)
        .create_pool(Some(Runtime::Tokio1))
        .expect("Failed to create Redis pool");
    let redis_arc = Arc::new(redis_pool);

    // Outgoing adapters
    let account_query = AccountQueryPostgres::new(Arc::clone(&db_arc));
    let account_repo = AccountRepositoryPostgres::new(Arc::clone(&db_arc));
    let hasher: Arc<dyn PasswordHasher> = Arc::new(BcryptHasher::default());
    let credentials: Arc<dyn CredentialGenerator> = Arc::new(RandomCredentials);

    let jwt_service = JwtTokenService::new(JwtConfig::from_env());
    let token_provider: Arc<dyn TokenProvider> = Arc::new(jwt_service);
    let refresh_tokens: Arc<dyn RefreshTokenStore> =
        Arc::new(RedisRefreshTokenStore::new(Arc::clone(&redis_arc)));
    let sessions = SessionService::new(Arc::clone(&token_provider), Arc::clone(&refresh_tokens));

    let account_emails = AccountEmailService::new(email_sender(&env_name));
    let notifier: Arc<dyn AccountEmailNotifier> =
        Arc::new(BackgroundEmailNotifier::new(Arc::new(account_emails)));

    // Account
    let activate: Arc<dyn IActivateAccountUseCase + Send + Sync> = Arc::new(
        ActivateAccountUseCase::new(account_query.clone(), account_repo.clone()),
    );
    let resolve_oauth: Arc<dyn IResolveOAuthAccountUseCase + Send + Sync> = Arc::new(
        ResolveOAuthAccountUseCase::new(account_query.clone(), account_repo.clone()),
    );

    let account = AccountUseCases {
        register: Arc::new(RegisterAccountUseCase::new(
            account_query.clone(),
            account_repo.clone(),
            Arc::clone(&hasher),
            Arc::clone(&credentials),
            Arc::clone(&notifier),
        )),
        activate: Arc::clone(&activate),
        request_activation: Arc::new(RequestActivationUseCase::new(
            account_query.clone(),
            account_repo.clone(),
            Arc::clone(&credentials),
            Arc::clone(&notifier),
        )),
        request_password_reset: Arc::new(RequestPasswordResetUseCase::new(
            account_query.clone(),
            account_repo.clone(),
            Arc::clone(&credentials),
            Arc::clone(&notifier),
        )),
        reset_password: Arc::new(ResetPasswordUseCase::new(
            account_query.clone(),
            account_repo.clone(),
            Arc::clone(&hasher),
        )),
        change_password: Arc::new(ChangePasswordUseCase::new(
            account_query.clone(),
            account_repo.clone(),
            Arc::clone(&hasher),
        )),
        get_profile: Arc::new(GetProfileUseCase::new(account_query.clone())),
        update_profile: Arc::new(UpdateProfileUseCase::new(
            account_query.clone(),
            account_repo.clone(),
        )),
        toggle_ban: Arc::new(ToggleBanUseCase::new(
            account_query.clone(),
            account_repo.clone(),
            Arc::clone(&refresh_tokens),
        )),
        resolve_oauth: Arc::clone(&resolve_oauth),
        list: Arc::new(ListAccountsUseCase::new(account_query.clone())),
        create: Arc::new(CreateAccountUseCase::new(
            account_query.clone(),
            account_repo.clone(),
            Arc::clone(&hasher),
            Arc::clone(&credentials),
            Arc::clone(&notifier),
        )),
        get: Arc::new(GetAccountUseCase::new(account_query.clone())),
        delete: Arc::new(DeleteAccountUseCase::new(
            account_query.clone(),
            account_repo,
            Arc::clone(&refresh_tokens),
        )),
    };

    // Auth
    let google = GoogleOAuthClient::new(GoogleOAuthConfig::from_env());
    let auth = AuthUseCases {
        login: Arc::new(LoginUseCase::new(
            account_query,
            Arc::clone(&hasher),
            sessions.clone(),
        )),
        logout: Arc::new(LogoutUseCase::new(sessions.clone())),
        refresh: Arc::new(RefreshSessionUseCase::new(sessions.clone())),
        activation_login: Arc::new(ActivationLoginOrchestrator::new(activate, sessions.clone())),
        oauth_login: Arc::new(OAuthLoginOrchestrator::new(
            Arc::new(google),
            resolve_oauth,
            sessions,
        )),
    };

    // Catalog
    let tag_query = TagQueryPostgres::new(Arc::clone(&db_arc));
    let tag_repo = TagRepositoryPostgres::new(Arc::clone(&db_arc));
    let tag = TagUseCases {
        create: Arc::new(CreateTagsService::new(tag_query.clone(), tag_repo.clone())),
        get_list: Arc::new(GetTagsService::new(tag_query.clone())),
        remove: Arc::new(RemoveTagsService::new(tag_query, tag_repo)),
    };

    let ingredient_query = IngredientQueryPostgres::new(Arc::clone(&db_arc));
    let ingredient_repo = IngredientRepositoryPostgres::new(Arc::clone(&db_arc));
    let ingredient = IngredientUseCases {
        create: Arc::new(CreateIngredientsService::new(
            ingredient_query.clone(),
            ingredient_repo.clone(),
        )),
        get_list: Arc::new(GetIngredientsService::new(ingredient_query.clone())),
        remove: Arc::new(RemoveIngredientsService::new(ingredient_query, ingredient_repo)),
    };

    // Recipe
    let recipe = RecipeUseCases {
        create: Arc::new(CreateRecipeService::new(RecipeRepositoryPostgres::new(
            Arc::clone(&db_arc),
        ))),
        get_list: Arc::new(GetRecipesService::new(RecipeQueryPostgres::new(
            Arc::clone(&db_arc),
        ))),
    };

    let state = web::Data::new(AppState {
        account,
        auth,
        tag,
        ingredient,
        recipe,
        client_login_url,
    });

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .app_data(web::Data::new(Arc::clone(&redis_arc)))
            .app_data(custom_json_config())
            .app_data(custom_query_config())
            .app_data(custom_path_config())
            .wrap(AuthGuard::new(
                RoutePolicies::recipe_api(),
                Arc::clone(&token_provider),
            ))
            .wrap(cors(&cors_origins))
            .wrap(Logger::default())
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    crate::modules::auth::adapter::incoming::web::routes::configure(cfg);
    crate::modules::account::adapter::incoming::web::routes::configure(cfg);
    crate::modules::recipe::adapter::incoming::web::routes::configure(cfg);
    crate::modules::tag::adapter::incoming::web::routes::configure(cfg);
    crate::modules::ingredient::adapter::incoming::web::routes::configure(cfg);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
