//! Demo data for trying the forum out locally.
//!
//! Runs at startup when `SEED_DEMO_DATA` is set and the database has no posts yet.
//! Everything goes through the services so content is sanitized, slugs are allocated
//! and audit entries are recorded exactly as for real requests.

use entity::{post::PostStatus, user::Role};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{post::PostRepository, user::UserRepository},
    error::AppError,
    model::{
        comment::CreateCommentParam,
        post::{CreatePostParam, PostSummary},
        user::{CreateUserParam, User},
    },
    service::{
        comment::CommentService,
        like::LikeService,
        post::PostService,
        user::{normalize_email, UserService},
    },
};

pub const DEMO_ADMIN_EMAIL: &str = "admin@demo.com";
pub const DEMO_ADMIN_PASSWORD: &str = "Admin123!";
pub const DEMO_USER_PASSWORD: &str = "User123!";

const DEMO_USERS: [(&str, &str); 3] = [
    ("Juan Pérez", "juan@demo.com"),
    ("María García", "maria@demo.com"),
    ("Carlos López", "carlos@demo.com"),
];

/// Title, content and tags of the hand-written demo posts, by author index.
const FEATURED_POSTS: [(usize, &str, &str, &[&str]); 3] = [
    (
        0,
        "Introduction to React: Core Concepts",
        "<p>React is a JavaScript library for building user interfaces.</p>\
         <h2>Components</h2><p>Components are functions that return elements.</p>\
         <h2>Props and State</h2><p>Props are passed in, state lives inside the component.</p>",
        &["programming", "react", "tutorial"],
    ),
    (
        1,
        "Node.js Best Practices",
        "<p>Node.js remains a cornerstone of backend development.</p>\
         <h2>Project Structure</h2><p>Organize code so it stays maintainable.</p>\
         <h2>Error Handling</h2><p>Robust error handling is crucial in production.</p>",
        &["nodejs", "advanced"],
    ),
    (
        2,
        "Tutorial: Your First REST API",
        "<p>Step by step, build a REST API from scratch.</p>\
         <h2>Routes</h2><p>Routes are the endpoints answering HTTP requests.</p>\
         <h2>Database</h2><p>Persist data in a real database.</p>",
        &["tutorial", "beginner", "web"],
    ),
];

/// Number of generated sample posts following the featured ones.
const SAMPLE_POSTS: usize = 7;

/// What [`seed_demo_data`] created.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub users: usize,
    pub posts: usize,
    pub comments: usize,
    pub likes: usize,
}

/// Seeds demo accounts, posts, tags, comments and likes into an empty forum.
///
/// # Returns
/// - `Ok(Some(SeedReport))` - Demo data was created
/// - `Ok(None)` - The forum already has posts, nothing was touched
/// - `Err(AppError)` - A service call failed part way through
pub async fn seed_demo_data(db: &DatabaseConnection) -> Result<Option<SeedReport>, AppError> {
    if PostRepository::new(db).count().await? > 0 {
        tracing::info!("Skipping demo data, the forum already has posts");
        return Ok(None);
    }

    let mut report = SeedReport::default();

    let admin = find_or_register(
        db,
        None,
        ("Administrator", DEMO_ADMIN_EMAIL, DEMO_ADMIN_PASSWORD),
        Role::Admin,
        &mut report,
    )
    .await?;

    let mut members = Vec::with_capacity(DEMO_USERS.len());
    for (name, email) in DEMO_USERS {
        let member = find_or_register(
            db,
            Some(admin.id),
            (name, email, DEMO_USER_PASSWORD),
            Role::User,
            &mut report,
        )
        .await?;
        members.push(member);
    }

    let post_service = PostService::new(db);
    let mut posts: Vec<PostSummary> = Vec::new();

    for (author, title, content, tags) in FEATURED_POSTS {
        let post = post_service
            .create(CreatePostParam {
                author_id: members[author].id,
                title: title.to_string(),
                content: content.to_string(),
                status: PostStatus::Published,
                tags: tags.iter().map(|t| t.to_string()).collect(),
            })
            .await?;
        posts.push(post);
    }

    for n in 1..=SAMPLE_POSTS {
        // Every third sample stays a draft.
        let status = if n % 3 == 0 { PostStatus::Draft } else { PostStatus::Published };

        let post = post_service
            .create(CreatePostParam {
                author_id: members[n % members.len()].id,
                title: format!("Sample Post {}", n + FEATURED_POSTS.len()),
                content: format!(
                    "<p>Sample post number {} showing how the forum works.</p>\
                     <ul><li>Lists like this one</li><li>Links and references</li>\
                     <li>Text in <strong>bold</strong> and <em>italics</em></li></ul>",
                    n + FEATURED_POSTS.len()
                ),
                status,
                tags: Vec::new(),
            })
            .await?;
        posts.push(post);
    }

    report.posts = posts.len();

    let public: Vec<&PostSummary> = posts.iter().filter(|p| p.post.is_public()).collect();
    let voices: Vec<&User> = members.iter().chain(std::iter::once(&admin)).collect();

    let comment_service = CommentService::new(db);
    for (i, post) in public.iter().take(5).enumerate() {
        for author in voices.iter().cycle().skip(i).take(i % 3 + 1) {
            comment_service
                .create(CreateCommentParam {
                    author_id: author.id,
                    post_id: post.post.id,
                    content: format!(
                        "<p>A sample comment on \"{}\". Really interesting topic.</p>",
                        post.post.title
                    ),
                })
                .await?;
            report.comments += 1;
        }
    }

    let like_service = LikeService::new(db);
    for (i, post) in public.iter().take(7).enumerate() {
        for user in voices.iter().take(i % voices.len() + 1) {
            like_service.toggle(user.id, post.post.id).await?;
            report.likes += 1;
        }
    }

    tracing::info!(
        "Seeded demo data: {} users, {} posts, {} comments, {} likes (admin {} / {})",
        report.users,
        report.posts,
        report.comments,
        report.likes,
        DEMO_ADMIN_EMAIL,
        DEMO_ADMIN_PASSWORD
    );

    Ok(Some(report))
}

/// Returns the account using `email`, registering it first when missing.
///
/// Accounts created on behalf of `actor_id` are audited like an administrator's create.
async fn find_or_register(
    db: &DatabaseConnection,
    actor_id: Option<i32>,
    (name, email, password): (&str, &str, &str),
    role: Role,
    report: &mut SeedReport,
) -> Result<User, AppError> {
    let existing = UserRepository::new(db)
        .find_credentials_by_email(&normalize_email(email))
        .await?;
    if let Some(credentials) = existing {
        return Ok(credentials.user);
    }

    let param = CreateUserParam {
        name: Some(name.to_string()),
        email: email.to_string(),
        password: password.to_string(),
        role,
    };

    let user_service = UserService::new(db);
    let user = match actor_id {
        Some(actor_id) => user_service.create(actor_id, param).await?,
        None => user_service.register(param).await?,
    };
    report.users += 1;

    Ok(user)
}
