//! sciportal - a command-line demonstration client for the platform API.
//!
//! Every command maps to a single REST call and prints the outcome as the
//! platform's own `{success, message, data}` JSON envelope, so the output
//! matches what a browser client would see on the wire.

use std::io;

use anyhow::Result;
use sciportal_core::models::{ImageFile, NewPost, Registration};
use sciportal_core::services::{
    ActivityQuery, ActivityService, ArticleQuery, ArticleService, AuthService, ForumService,
    PostQuery, UploadService,
};
use sciportal_core::{
    ApiClient, ApiResult, Config, Session, SessionStore, WireResponse, DEFAULT_BASE_URL,
};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging
fn init_tracing() {
    // Use RUST_LOG env var to control log level (e.g., RUST_LOG=debug)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn print_result<T: serde::Serialize>(result: ApiResult<T>) -> Result<()> {
    let wire = WireResponse::from_result(result);
    println!("{}", serde_json::to_string_pretty(&wire)?);
    Ok(())
}

fn arg<'a>(args: &'a [String], index: usize, name: &str) -> Result<&'a str> {
    args.get(index)
        .map(String::as_str)
        .ok_or_else(|| anyhow::anyhow!("missing argument: {}", name))
}

fn parse_id(args: &[String], index: usize) -> Result<i64> {
    arg(args, index, "id")?
        .parse()
        .map_err(|_| anyhow::anyhow!("id must be a number"))
}

/// Read a local file for upload, guessing the MIME type from the
/// extension. The service rejects anything that is not an image anyway.
fn read_image(path: &str) -> Result<ImageFile> {
    let bytes = std::fs::read(path)?;
    let file_name = std::path::Path::new(path)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "upload".to_string());
    let extension = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase());
    let mime_type = match extension.as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    }
    .to_string();
    Ok(ImageFile {
        file_name,
        mime_type,
        bytes,
    })
}

fn usage() {
    eprintln!("usage: sciportal <command> [args]");
    eprintln!();
    eprintln!("  login <account>                 log in (prompts for password)");
    eprintln!("  admin-login <account>           log in as administrator");
    eprintln!("  register <account> <username> <email> [phone]");
    eprintln!("  logout                          drop the local session");
    eprintln!("  whoami                          fetch the current user");
    eprintln!("  update <field=value>...         update profile fields");
    eprintln!("  articles [keyword]              list science articles");
    eprintln!("  article <id>                    article detail");
    eprintln!("  activities [keyword]            list activities");
    eprintln!("  activity <id>                   activity detail");
    eprintln!("  posts [category] [keyword]      list forum posts");
    eprintln!("  post <id>                       post detail");
    eprintln!("  post-create <title> <content> [category] [tags...]");
    eprintln!("  like <id>                       like a post");
    eprintln!("  upload <path>                   upload an image");
    eprintln!("  avatar <path>                   upload an avatar");
    eprintln!("  delete-image <url>              delete an uploaded image");
    eprintln!("  stats                           article and activity statistics");
    eprintln!();
    eprintln!("Base URL: SCIPORTAL_BASE_URL env, then config, then {}", DEFAULT_BASE_URL);
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();
    init_tracing();

    let mut config = Config::load()?;
    let base_url = std::env::var("SCIPORTAL_BASE_URL")
        .ok()
        .or_else(|| config.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    let api = ApiClient::new(base_url)?;
    let mut session = Session::new(SessionStore::new(Config::session_dir()?));
    session.restore();
    info!(base_url = api.base_url(), "sciportal client ready");

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = args.first().map(String::as_str).unwrap_or("help");

    match command {
        "login" => {
            let account = arg(&args, 1, "account")?;
            let password = rpassword::prompt_password("Password: ")?;
            let result = AuthService::new(api.clone())
                .login(&mut session, account, &password)
                .await;
            if result.is_ok() {
                config.last_account = Some(account.to_string());
                config.save()?;
            }
            print_result(result)?;
        }
        "admin-login" => {
            let account = arg(&args, 1, "account")?;
            let password = rpassword::prompt_password("Password: ")?;
            let result = AuthService::new(api.clone())
                .admin_login(&mut session, account, &password)
                .await;
            print_result(result)?;
        }
        "register" => {
            let registration = Registration {
                account: arg(&args, 1, "account")?.to_string(),
                username: arg(&args, 2, "username")?.to_string(),
                email: arg(&args, 3, "email")?.to_string(),
                phone: args.get(4).cloned().unwrap_or_default(),
                password: rpassword::prompt_password("Password: ")?,
            };
            print_result(AuthService::new(api.clone()).register(&registration).await)?;
        }
        "logout" => {
            AuthService::new(api.clone()).logout(&mut session);
            println!("logged out");
        }
        "whoami" => {
            print_result(
                AuthService::new(api.clone())
                    .fetch_user_info(&mut session)
                    .await,
            )?;
        }
        "update" => {
            let mut fields = serde_json::Map::new();
            for pair in args.iter().skip(1) {
                let (key, value) = pair
                    .split_once('=')
                    .ok_or_else(|| anyhow::anyhow!("expected field=value, got '{}'", pair))?;
                fields.insert(
                    key.to_string(),
                    serde_json::Value::String(value.to_string()),
                );
            }
            print_result(
                AuthService::new(api.clone())
                    .update_profile(&session, serde_json::Value::Object(fields))
                    .await,
            )?;
        }
        "articles" => {
            let query = ArticleQuery {
                keyword: args.get(1).cloned().unwrap_or_default(),
                ..Default::default()
            };
            print_result(ArticleService::new(api.clone()).list(&query).await)?;
        }
        "article" => {
            print_result(
                ArticleService::new(api.clone())
                    .detail(parse_id(&args, 1)?)
                    .await,
            )?;
        }
        "activities" => {
            let query = ActivityQuery {
                keyword: args.get(1).cloned().unwrap_or_default(),
                ..Default::default()
            };
            print_result(ActivityService::new(api.clone()).list(&query).await)?;
        }
        "activity" => {
            print_result(
                ActivityService::new(api.clone())
                    .detail(parse_id(&args, 1)?)
                    .await,
            )?;
        }
        "posts" => {
            let query = PostQuery {
                category: args.get(1).cloned().unwrap_or_default(),
                keyword: args.get(2).cloned().unwrap_or_default(),
                ..Default::default()
            };
            print_result(ForumService::new(api.clone()).list(&query).await)?;
        }
        "post" => {
            print_result(
                ForumService::new(api.clone())
                    .detail(parse_id(&args, 1)?)
                    .await,
            )?;
        }
        "post-create" => {
            let post = NewPost {
                title: arg(&args, 1, "title")?.to_string(),
                content: arg(&args, 2, "content")?.to_string(),
                category: args
                    .get(3)
                    .cloned()
                    .unwrap_or_else(|| "discussion".to_string()),
                tags: args.get(4..).map(<[String]>::to_vec).unwrap_or_default(),
            };
            print_result(ForumService::new(api.clone()).create(&session, &post).await)?;
        }
        "like" => {
            print_result(
                ForumService::new(api.clone())
                    .like(&session, parse_id(&args, 1)?)
                    .await,
            )?;
        }
        "upload" => {
            let file = read_image(arg(&args, 1, "path")?)?;
            print_result(
                UploadService::new(api.clone())
                    .upload_image(&session, file)
                    .await,
            )?;
        }
        "avatar" => {
            let file = read_image(arg(&args, 1, "path")?)?;
            print_result(
                UploadService::new(api.clone())
                    .upload_avatar(&session, file)
                    .await,
            )?;
        }
        "delete-image" => {
            print_result(
                UploadService::new(api.clone())
                    .delete_image(&session, arg(&args, 1, "image url")?)
                    .await,
            )?;
        }
        "stats" => {
            let articles = ArticleService::new(api.clone());
            let activities = ActivityService::new(api.clone());
            // The two calls share nothing; let them race.
            let (article_stats, activity_stats) =
                tokio::join!(articles.statistics(), activities.statistics());
            print_result(article_stats)?;
            print_result(activity_stats)?;
        }
        _ => usage(),
    }

    Ok(())
}
