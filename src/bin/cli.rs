//! Cardio Guard CLI
//!
//! Command-line client for the Cardio Guard service:
//! - Sign in, register, manage the profile
//! - Browse and write community posts
//! - Walk through the risk assessment and find nearby hospitals
//! - Send feedback and contact messages

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use cardio_guard::api::{CardioClient, ClientError};
use cardio_guard::app::{Assessment, CardioGuard};
use cardio_guard::assessment::{format_number, AssessmentForm, FieldDescriptor, FieldKind};
use cardio_guard::community::PostBoard;
use cardio_guard::config::{Config, LoggingConfig};
use cardio_guard::forms::{ContactForm, FeedbackForm};
use cardio_guard::links;
use cardio_guard::model::{
    CommentId, Coordinates, Credentials, Hospital, Post, PostDetail, PostDraft, PostId,
    ProfileUpdate, Registration, Upload,
};
use cardio_guard::session::{FileStore, Session};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

type App = CardioGuard<FileStore>;

#[derive(Parser)]
#[command(name = "cardio-guard")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Heart-health risk assessment and community client")]
#[command(long_about = "Cardio Guard checks your heart-disease risk, points you to nearby cardiac care,\nand connects you with a community of people looking after their hearts.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// API base URL (overrides config and CARDIO_GUARD_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Sign in and remember the session
    Login {
        #[arg(short, long)]
        email: String,
        /// Password (prompted when omitted)
        #[arg(short, long)]
        password: Option<String>,
    },

    /// Create an account
    Register {
        #[arg(short, long)]
        email: String,
        #[arg(short, long)]
        password: Option<String>,
        #[arg(long, default_value = "")]
        first_name: String,
        #[arg(long, default_value = "")]
        last_name: String,
        #[arg(long, default_value = "")]
        phone: String,
    },

    /// Forget the stored session
    Logout,

    /// Show the signed-in user
    Whoami,

    /// Manage your profile
    Profile {
        #[command(subcommand)]
        action: ProfileCommands,
    },

    /// Community posts
    Posts {
        #[command(subcommand)]
        action: PostCommands,
    },

    /// Comment on a post
    Comment {
        /// Post ID
        post: PostId,
        content: String,
    },

    /// Reply to a comment
    Reply {
        /// Post the comment belongs to
        post: PostId,
        /// Comment ID
        comment: CommentId,
        content: String,
    },

    /// Answer the risk questionnaire and get a prediction
    Predict {
        /// Latitude for hospital recommendations
        #[arg(long, requires = "lng", allow_negative_numbers = true)]
        lat: Option<f64>,
        /// Longitude for hospital recommendations
        #[arg(long, requires = "lat", allow_negative_numbers = true)]
        lng: Option<f64>,
    },

    /// Find hospitals near a location
    Hospitals {
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        #[arg(long, allow_negative_numbers = true)]
        lng: f64,
    },

    /// Rate the service
    Feedback {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(short, long)]
        message: String,
        /// Stars, 1-5
        #[arg(short, long)]
        rating: u8,
    },

    /// Send a message to the team
    Contact {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(short, long)]
        subject: String,
        #[arg(short, long)]
        message: String,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum ProfileCommands {
    /// Change name, username or phone (blank fields stay unchanged)
    Edit {
        #[arg(long)]
        first_name: Option<String>,
        #[arg(long)]
        last_name: Option<String>,
        #[arg(long)]
        username: Option<String>,
        #[arg(long)]
        phone: Option<String>,
    },

    /// Upload a new profile picture
    Picture {
        /// Image file
        path: PathBuf,
    },
}

#[derive(Subcommand)]
pub enum PostCommands {
    /// List posts
    List {
        /// Only your own posts
        #[arg(long)]
        mine: bool,
        /// Case-insensitive search over title and content
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Show a post with its comments
    Show { id: PostId },

    /// Write a new post
    Create {
        #[arg(short, long)]
        title: String,
        #[arg(short, long)]
        content: String,
        /// Image to attach
        #[arg(short, long)]
        image: Option<PathBuf>,
    },

    /// Edit one of your posts
    Edit {
        id: PostId,
        #[arg(short, long)]
        title: Option<String>,
        #[arg(short, long)]
        content: Option<String>,
    },

    /// Delete one of your posts
    Delete {
        id: PostId,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load_default();
    if let Some(url) = &cli.api_url {
        config.api.base_url = url.clone();
    }
    init_logging(&config.logging);

    if let Commands::Config { output } = &cli.command {
        return write_config(output.as_deref());
    }

    let client = CardioClient::new(config.api.clone().into())?;
    let session = Session::load(FileStore::new(&config.session.path))
        .with_context(|| format!("Cannot read session from {}", config.session.path))?;
    let mut app = CardioGuard::new(client, session);

    if let Err(e) = run(cli, &mut app).await {
        match e.downcast_ref::<ClientError>() {
            Some(err) => {
                tracing::debug!(error = %err, "Command failed");
                eprintln!("{}", err.user_message());
                if err.is_missing_session() || err.is_unauthorized() {
                    eprintln!();
                    eprintln!("Sign in first:");
                    eprintln!("  cardio-guard login --email <email>");
                }
            }
            None => eprintln!("Error: {:#}", e),
        }
        std::process::exit(1);
    }

    Ok(())
}

fn init_logging(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("cardio_guard={}", config.level)));
    let registry = tracing_subscriber::registry().with(filter);

    if config.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

async fn run(cli: Cli, app: &mut App) -> anyhow::Result<()> {
    let json = cli.format == "json";

    match cli.command {
        Commands::Login { email, password } => {
            let password = match password {
                Some(p) => p,
                None => prompt("Password: ")?,
            };
            let user = app.login(Credentials { email, password }).await?;
            println!("Signed in as {}", user.display_name());
        }

        Commands::Register {
            email,
            password,
            first_name,
            last_name,
            phone,
        } => {
            let password = match password {
                Some(p) => p,
                None => prompt("Password: ")?,
            };
            let registered = app
                .register(Registration {
                    email: email.clone(),
                    password,
                    first_name,
                    last_name,
                    phone_number: phone,
                })
                .await?;
            println!("{}", registered.message);
            println!();
            println!("Sign in with:");
            println!("  cardio-guard login --email {}", email);
        }

        Commands::Logout => {
            let home = app.logout()?;
            println!("Signed out. Back to {}", home);
        }

        Commands::Whoami => {
            let cached = app.session().user().cloned();
            let user = match cached {
                Some(user) => user,
                None => app.refresh_profile().await?,
            };

            if json {
                return print_json(&user);
            }
            let picture = user
                .profile_picture
                .as_deref()
                .map(|p| links::profile_picture_url(app.client().base_url(), p))
                .unwrap_or_else(|| links::avatar_url(&user.display_name()));

            println!("{}", user.display_name());
            println!("  Email:    {}", user.email);
            if let Some(username) = &user.username {
                println!("  Username: {}", username);
            }
            if let Some(phone) = &user.phone_number {
                println!("  Phone:    {}", phone);
            }
            println!("  Picture:  {}", picture);
        }

        Commands::Profile { action } => match action {
            ProfileCommands::Edit {
                first_name,
                last_name,
                username,
                phone,
            } => {
                let ack = app
                    .edit_profile(&ProfileUpdate {
                        first_name,
                        last_name,
                        username,
                        phone_number: phone,
                    })
                    .await?;
                println!("{}", or_default(&ack.message, "Profile updated"));
            }
            ProfileCommands::Picture { path } => {
                let ack = app.change_picture(read_upload(&path)?).await?;
                println!("{}", or_default(&ack.message, "Profile picture updated"));
            }
        },

        Commands::Posts { action } => posts(app, action, json).await?,

        Commands::Comment { post, content } => {
            let detail = app.comment(post, &content).await?;
            show_thread(app, &detail, json)?;
        }

        Commands::Reply {
            post,
            comment,
            content,
        } => {
            let detail = app.reply(post, comment, &content).await?;
            show_thread(app, &detail, json)?;
        }

        Commands::Predict { lat, lng } => {
            let at = lat.zip(lng).map(|(latitude, longitude)| Coordinates {
                latitude,
                longitude,
            });
            predict(app, at, json).await?;
        }

        Commands::Hospitals { lat, lng } => {
            let hospitals = app
                .hospitals(Coordinates {
                    latitude: lat,
                    longitude: lng,
                })
                .await?;
            if json {
                return print_json(&hospitals);
            }
            print_hospitals(&hospitals);
        }

        Commands::Feedback {
            name,
            email,
            message,
            rating,
        } => {
            let ack = app
                .feedback(&FeedbackForm {
                    name,
                    email,
                    message,
                    rating,
                })
                .await?;
            println!("{}", or_default(&ack.message, "Thank you for your feedback!"));
        }

        Commands::Contact {
            name,
            email,
            subject,
            message,
        } => {
            let ack = app
                .contact(&ContactForm {
                    name,
                    email,
                    subject,
                    message,
                })
                .await?;
            println!("{}", or_default(&ack.message, "Message sent"));
        }

        Commands::Config { output } => write_config(output.as_deref())?,
    }

    Ok(())
}

async fn posts(app: &mut App, action: PostCommands, json: bool) -> anyhow::Result<()> {
    match action {
        PostCommands::List { mine, search } => {
            let posts = if mine {
                app.my_posts().await?
            } else {
                app.posts().await?
            };

            let mut board = PostBoard::new(posts);
            if let Some(query) = search {
                board.set_query(query);
            }
            let visible = board.visible();

            if json {
                return print_json(&visible);
            }
            print_posts(&visible, board.query());
        }

        PostCommands::Show { id } => {
            let detail = app.post(id).await?;
            show_thread(app, &detail, json)?;
        }

        PostCommands::Create {
            title,
            content,
            image,
        } => {
            let image = image.as_deref().map(read_upload).transpose()?;
            let ack = app.create_post(&PostDraft { title, content }, image).await?;
            println!("{}", or_default(&ack.message, "Post created"));
        }

        PostCommands::Edit { id, title, content } => {
            let mut board = PostBoard::new(app.my_posts().await?);
            if !board.begin_edit(id) {
                bail!("Post {} is not one of your posts", id);
            }
            if let Some(draft) = board.draft_mut() {
                if let Some(title) = title {
                    draft.title = title;
                }
                if let Some(content) = content {
                    draft.content = content;
                }
            }

            let Some((id, draft)) = board.pending_edit().map(|(id, d)| (id, d.clone())) else {
                bail!("Nothing to edit");
            };
            let updated = app.edit_post(id, &draft).await?;
            board.apply_edit(updated);

            if let Some(post) = board.get(id) {
                if json {
                    return print_json(post);
                }
                println!("Updated post {}: {}", post.id, post.title);
            }
        }

        PostCommands::Delete { id, yes } => {
            let mut board = PostBoard::new(app.my_posts().await?);
            if !board.request_delete(id) {
                bail!("Post {} is not one of your posts", id);
            }

            if !yes {
                let title = board.get(id).map(|p| p.title.clone()).unwrap_or_default();
                let answer = prompt(&format!("Delete \"{}\"? [y/N] ", title))?;
                if !matches!(answer.trim().to_lowercase().as_str(), "y" | "yes") {
                    board.cancel_delete();
                    println!("Kept post {}", id);
                    return Ok(());
                }
            }

            if let Some(id) = board.confirm_delete() {
                let ack = app.delete_post(id).await?;
                board.remove(id);
                println!("{}", or_default(&ack.message, "Post deleted"));
                println!("{} post(s) left", board.posts().len());
            }
        }
    }

    Ok(())
}

// ============================================
// Assessment
// ============================================

enum Answer {
    Keep,
    Value(String),
    Back,
}

async fn predict(app: &mut App, at: Option<Coordinates>, json: bool) -> anyhow::Result<()> {
    let mut form = AssessmentForm::new();

    println!("Heart-health assessment");
    println!("Press Enter to keep a value, type \"back\" to return to the previous step.");

    'steps: loop {
        println!();
        println!("Step {} of {}", form.current_step() + 1, form.step_count());
        println!("{}", "-".repeat(40));

        for field in form.current_fields() {
            match ask_field(field.descriptor(), form.value(*field))? {
                Answer::Keep => {}
                Answer::Value(value) => form.set_field(*field, value),
                Answer::Back => {
                    form.previous();
                    continue 'steps;
                }
            }
        }

        if form.is_last_step() {
            break;
        }
        form.next();
    }

    if let Ok(input) = form.submit() {
        for warning in input.range_warnings() {
            eprintln!("Note: {}", warning);
        }
    }

    let Assessment {
        prediction,
        hospitals,
    } = app.assess(&form, at).await?;
    let level = prediction.level();

    if json {
        let (found, search_error) = match &hospitals {
            Some(Ok(found)) => (Some(found), None),
            Some(Err(e)) => (None, Some(e.user_message())),
            None => (None, None),
        };
        return print_json(&serde_json::json!({
            "prediction": prediction,
            "risk_level": level,
            "hospitals": found,
            "hospitals_error": search_error,
        }));
    }

    println!();
    println!("{}", level.headline());
    println!("{}", prediction.text);

    match hospitals {
        Some(Ok(hospitals)) => {
            println!();
            println!("{}", level.hospitals_heading());
            println!("{}", level.hospitals_intro());
            println!();
            print_hospitals(&hospitals);
            println!();
            println!("{}", level.advice());
        }
        Some(Err(e)) => {
            eprintln!();
            eprintln!("Could not look up nearby hospitals: {}", e.user_message());
            println!("{}", level.advice());
        }
        None => {}
    }

    Ok(())
}

fn ask_field(descriptor: &FieldDescriptor, current: &str) -> anyhow::Result<Answer> {
    println!();
    println!("{}", descriptor.label);

    match descriptor.kind {
        FieldKind::Numeric {
            unit,
            hint,
            suggestions,
            ..
        } => {
            if let Some(hint) = hint {
                println!("  {}", hint);
            }
            if !suggestions.is_empty() {
                let list: Vec<String> = suggestions.iter().map(|s| format_number(*s)).collect();
                println!("  Suggestions: {}", list.join(", "));
            }
            let unit = unit.map(|u| format!(" ({})", u)).unwrap_or_default();
            read_answer(
                &format!("  Value{}{}: ", unit, current_marker(current)),
                "  Enter a number",
                |value| value.parse::<f64>().map(f64::is_finite).unwrap_or(false),
            )
        }
        FieldKind::Choice { options } => {
            for option in options {
                match option.description {
                    Some(description) => {
                        println!("  [{}] {} - {}", option.value, option.label, description)
                    }
                    None => println!("  [{}] {}", option.value, option.label),
                }
            }
            read_answer(
                &format!("  Choice{}: ", current_marker(current)),
                "  Pick one of the listed values",
                |value| {
                    value
                        .parse::<f64>()
                        .map(|v| descriptor.accepts(v))
                        .unwrap_or(false)
                },
            )
        }
    }
}

fn current_marker(current: &str) -> String {
    if current.is_empty() {
        String::new()
    } else {
        format!(" [{}]", current)
    }
}

fn read_answer(label: &str, retry: &str, valid: impl Fn(&str) -> bool) -> anyhow::Result<Answer> {
    loop {
        let answer = prompt(label)?;
        let answer = answer.trim();

        if answer.is_empty() {
            return Ok(Answer::Keep);
        }
        if answer.eq_ignore_ascii_case("back") {
            return Ok(Answer::Back);
        }
        if valid(answer) {
            return Ok(Answer::Value(answer.to_string()));
        }
        println!("{}", retry);
    }
}

// ============================================
// Output
// ============================================

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_posts(posts: &[&Post], query: &str) {
    if posts.is_empty() {
        if query.is_empty() {
            println!("No posts yet.");
            println!();
            println!("Start the conversation with:");
            println!("  cardio-guard posts create --title <title> --content <text>");
        } else {
            println!("No posts match \"{}\"", query);
        }
        return;
    }

    println!("{:<6} {:<36} {:<20} {}", "ID", "Title", "Author", "Created");
    println!("{}", "-".repeat(84));

    for post in posts {
        println!(
            "{:<6} {:<36} {:<20} {}",
            post.id,
            truncate(&post.title, 36),
            truncate(post.user.as_deref().unwrap_or("-"), 20),
            post.created_label()
        );
    }
}

fn show_thread(app: &App, detail: &PostDetail, json: bool) -> anyhow::Result<()> {
    if json {
        return print_json(detail);
    }

    let post = &detail.post;
    println!("#{} {}", post.id, post.title);
    println!(
        "by {} {}",
        post.user.as_deref().unwrap_or("unknown"),
        post.created_label()
    );
    if let Some(image) = &post.image {
        println!("Image: {}", links::post_image_url(app.client().base_url(), image));
    }
    println!();
    println!("{}", post.content);
    println!();
    println!("Comments ({})", detail.comment_count());

    for comment in &detail.comments {
        println!("  [{}] {}: {}", comment.id, comment.user, comment.content);
        for reply in &comment.replies {
            println!("      {}: {}", reply.user, reply.content);
        }
    }
    Ok(())
}

fn print_hospitals(hospitals: &[Hospital]) {
    if hospitals.is_empty() {
        println!("No hospitals found nearby.");
        return;
    }

    for hospital in hospitals {
        let rating = hospital
            .rating
            .map(|r| format!("{:.1}", r))
            .unwrap_or_else(|| "-".to_string());
        let open = if hospital.is_open_now() { "Open now" } else { "Closed" };

        println!("{}", hospital.name);
        println!(
            "  {} | rating {} ({} reviews) | {}",
            hospital.vicinity,
            rating,
            hospital.user_ratings_total.unwrap_or(0),
            open
        );
        println!("  Directions: {}", links::directions_url(hospital.location()));
    }
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        text.to_string()
    } else {
        let cut: String = text.chars().take(width.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}

fn or_default<'a>(message: &'a str, fallback: &'a str) -> &'a str {
    if message.is_empty() {
        fallback
    } else {
        message
    }
}

// ============================================
// Input
// ============================================

fn prompt(label: &str) -> anyhow::Result<String> {
    print!("{}", label);
    std::io::stdout().flush()?;

    let mut line = String::new();
    if std::io::stdin().read_line(&mut line)? == 0 {
        bail!("Input closed");
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn read_upload(path: &Path) -> anyhow::Result<Upload> {
    let bytes = std::fs::read(path).with_context(|| format!("Cannot read {:?}", path))?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "upload".to_string());
    Ok(Upload { file_name, bytes })
}

fn write_config(output: Option<&Path>) -> anyhow::Result<()> {
    let config = cardio_guard::config::generate_default_config();

    match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, &config)?;
            println!("Config written to {:?}", path);
        }
        None => print!("{}", config),
    }
    Ok(())
}

