use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use snapbee::models::models::{LoginRequest, NewPost, SignupRequest, User};
use snapbee::views::{EditProfileForm, FeedView, PostCard, ProfileView, StoryBar, StoryComposer};
use snapbee::{auth, posts, users, ApiClient, Config, SessionStore};

#[derive(Parser)]
#[command(name = "snapbee", about = "Command-line client for the SnapBee photo-sharing API")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create a new account
    Signup {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
    },
    /// Log in and persist the session token
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Drop the persisted session
    Logout,
    /// Show the logged-in user
    Whoami,
    /// Posts from the people you follow, newest first
    Feed,
    /// Current stories from the people you follow
    Stories,
    /// Search users by name or username
    Search { query: String },
    /// Show a user's profile and posts
    Profile { username: String },
    /// Follow a user by username
    Follow { username: String },
    /// Unfollow a user by username
    Unfollow { username: String },
    /// Publish a post
    Post {
        #[arg(long)]
        image: String,
        #[arg(long, default_value = "")]
        caption: String,
        #[arg(long)]
        location: Option<String>,
    },
    /// Delete one of your posts
    DeletePost { post_id: i64 },
    /// Toggle your like on a post
    Like { post_id: i64 },
    /// Save a post to your collection
    Save { post_id: i64 },
    /// Remove a post from your collection
    Unsave { post_id: i64 },
    /// Publish a story
    Story {
        #[arg(long)]
        image: String,
        #[arg(long)]
        caption: Option<String>,
    },
    /// Comment on a post
    Comment { post_id: i64, content: String },
    /// Update your profile fields
    Edit {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        bio: Option<String>,
        #[arg(long)]
        image: Option<String>,
        #[arg(long)]
        mobile: Option<String>,
        #[arg(long)]
        gender: Option<String>,
    },
}

/// Initialize the session and insist on a logged-in user, the CLI analogue
/// of the login redirect.
async fn require_user(session: &mut SessionStore) -> Result<User> {
    session.initialize().await?;
    match session.current_user() {
        Some(user) => Ok(user.clone()),
        None => bail!("Not logged in. Run `snapbee login` first."),
    }
}

fn print_card(card: &PostCard) {
    let location = card
        .post
        .location
        .as_deref()
        .map(|l| format!(" @ {}", l))
        .unwrap_or_default();
    println!(
        "#{} {}{}: {} ({} likes, {} comments, {})",
        card.post.id,
        card.post.user.username,
        location,
        card.post.caption,
        card.likes_count,
        card.comments.len(),
        card.post.created_at.format("%Y-%m-%d %H:%M"),
    );
}

fn print_user_line(user: &User) {
    let bio = user.bio.as_deref().unwrap_or("");
    println!("#{} {} ({}) {}", user.id, user.username, user.name, bio);
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::from_env();
    let api = ApiClient::new(&config)?;
    let mut session = SessionStore::new(api.clone());

    match cli.command {
        Command::Signup { name, email, username, password } => {
            let user = auth::signup(&api, &SignupRequest { name, email, username, password }).await?;
            println!("Account created for {}. Log in to start posting.", user.username);
        }
        Command::Login { email, password } => {
            let token = auth::login(&api, &LoginRequest { email, password }).await?;
            session.login(&token).await?;
            let user = session.current_user().context("session not populated")?;
            println!("Logged in as {}.", user.username);
        }
        Command::Logout => {
            session.initialize().await.ok();
            session.logout();
            println!("Logged out.");
        }
        Command::Whoami => {
            let user = require_user(&mut session).await?;
            print_user_line(&user);
            println!(
                "{} followers, {} following, {} saved posts",
                user.followers.len(),
                user.following.len(),
                user.saved_posts.len(),
            );
        }
        Command::Feed => {
            let user = require_user(&mut session).await?;
            let mut feed = FeedView::new();
            feed.load(&api, &user).await;
            if let Some(error) = feed.error {
                bail!("Could not load the feed: {}", error);
            }
            if feed.cards.is_empty() {
                println!("Your feed is empty. Follow someone to see their posts.");
            }
            for card in &feed.cards {
                print_card(card);
            }
        }
        Command::Stories => {
            let user = require_user(&mut session).await?;
            let mut bar = StoryBar::new();
            bar.load(&api, &user).await;
            if bar.groups.is_empty() {
                println!("No stories right now.");
            }
            for group in &bar.groups {
                println!("{}: {} stories", group.user.username, group.stories.len());
            }
        }
        Command::Search { query } => {
            require_user(&mut session).await?;
            let results = users::search(&api, &query).await?;
            if results.is_empty() {
                println!("No users found.");
            }
            for user in &results {
                print_user_line(user);
            }
        }
        Command::Profile { username } => {
            require_user(&mut session).await?;
            let profile = ProfileView::load(&session, &username).await?;
            print_user_line(&profile.user);
            println!(
                "{} followers, {} posts{}",
                profile.follower_count,
                profile.cards.len(),
                if profile.is_following { " [following]" } else { "" },
            );
            for card in &profile.cards {
                print_card(card);
            }
        }
        Command::Follow { username } => {
            require_user(&mut session).await?;
            let mut profile = ProfileView::load(&session, &username).await?;
            if profile.is_following {
                println!("Already following {}.", profile.user.username);
            } else {
                profile.toggle_follow(&mut session).await?;
                println!("Now following {}.", profile.user.username);
            }
        }
        Command::Unfollow { username } => {
            require_user(&mut session).await?;
            let mut profile = ProfileView::load(&session, &username).await?;
            if !profile.is_following {
                println!("You are not following {}.", profile.user.username);
            } else {
                profile.toggle_follow(&mut session).await?;
                println!("Unfollowed {}.", profile.user.username);
            }
        }
        Command::Post { image, caption, location } => {
            require_user(&mut session).await?;
            let post = posts::create(&api, &NewPost { caption, image, location }).await?;
            println!("Posted #{}.", post.id);
        }
        Command::DeletePost { post_id } => {
            require_user(&mut session).await?;
            let reply = posts::delete(&api, post_id).await?;
            println!("{}", if reply.message.is_empty() { "Post deleted.".to_string() } else { reply.message });
        }
        Command::Like { post_id } => {
            let user = require_user(&mut session).await?;
            let post = posts::by_id(&api, post_id).await?;
            let mut card = PostCard::new(post, user.id);
            card.toggle_like(&api).await?;
            println!(
                "{} post #{} ({} likes).",
                if card.is_liked { "Liked" } else { "Unliked" },
                post_id,
                card.likes_count,
            );
        }
        Command::Save { post_id } => {
            require_user(&mut session).await?;
            posts::save(&api, post_id).await?;
            println!("Saved post #{}.", post_id);
        }
        Command::Unsave { post_id } => {
            require_user(&mut session).await?;
            posts::unsave(&api, post_id).await?;
            println!("Removed post #{} from saved.", post_id);
        }
        Command::Story { image, caption } => {
            require_user(&mut session).await?;
            let mut composer = StoryComposer {
                image,
                caption: caption.unwrap_or_default(),
                ..Default::default()
            };
            let story = composer.submit(&api).await?;
            println!("Story #{} published.", story.id);
        }
        Command::Comment { post_id, content } => {
            let user = require_user(&mut session).await?;
            let post = posts::by_id(&api, post_id).await?;
            let mut card = PostCard::new(post, user.id);
            card.submit_comment(&api, &content).await?;
            println!("Comment added to post #{}.", post_id);
        }
        Command::Edit { name, bio, image, mobile, gender } => {
            let user = require_user(&mut session).await?;
            let mut form = EditProfileForm::from_user(&user);
            if let Some(name) = name {
                form.name = name;
            }
            if let Some(bio) = bio {
                form.bio = bio;
            }
            if let Some(image) = image {
                form.image = image;
            }
            if let Some(mobile) = mobile {
                form.mobile = mobile;
            }
            if let Some(gender) = gender {
                form.gender = gender;
            }
            let updated = form.submit(&mut session).await?;
            println!("Profile updated for {}.", updated.username);
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    run(Cli::parse()).await
}
