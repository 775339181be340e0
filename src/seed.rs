use chrono::{DateTime, Utc};

use crate::{models::Post, Error, Result};

struct Demo {
    id: &'static str,
    title: &'static str,
    content: &'static str,
    author: &'static str,
    created_at: &'static str,
    tags: &'static [&'static str],
    image: &'static str,
}

const DEMO_POSTS: &[Demo] = &[
    Demo {
        id: "1",
        title: "Getting Started with React Hooks",
        content: "React Hooks have revolutionized the way we write React components. In this \
                  comprehensive guide, we'll explore the most commonly used hooks and how they \
                  can simplify your code. From useState to useEffect, we'll cover practical \
                  examples and best practices that will help you become more productive in \
                  your React development journey.",
        author: "Alice Johnson",
        created_at: "2024-01-15T10:30:00Z",
        tags: &["React", "JavaScript", "Web Development"],
        image: "photo-1633356122544-f134324a6cee",
    },
    Demo {
        id: "2",
        title: "The Future of Web Development",
        content: "Web development is constantly evolving, with new technologies and frameworks \
                  emerging regularly. This post explores upcoming trends including WebAssembly, \
                  edge computing, and the rise of serverless architectures. We'll also discuss \
                  how these technologies will impact developer workflows and user experiences \
                  in the coming years.",
        author: "Bob Smith",
        created_at: "2024-01-10T14:20:00Z",
        tags: &["Web Development", "Technology", "Future"],
        image: "photo-1667372393119-3d4c48d07fc9",
    },
    Demo {
        id: "3",
        title: "Building Scalable APIs with Node.js",
        content: "Creating robust and scalable APIs is crucial for modern applications. This \
                  article dives deep into Node.js best practices, including proper error \
                  handling, database optimization, caching strategies, and API versioning. \
                  We'll also cover security considerations and performance monitoring \
                  techniques that every backend developer should know.",
        author: "Carol Davis",
        created_at: "2024-01-08T09:15:00Z",
        tags: &["Node.js", "API", "Backend"],
        image: "photo-1558494949-ef010cbdcc31",
    },
    Demo {
        id: "4",
        title: "CSS Grid vs Flexbox: When to Use What",
        content: "Both CSS Grid and Flexbox are powerful layout systems, but knowing when to use \
                  each can be challenging. This guide provides clear examples and use cases for \
                  both technologies. We'll build real-world layouts and discuss the strengths \
                  and limitations of each approach, helping you make informed decisions in \
                  your projects.",
        author: "David Wilson",
        created_at: "2024-01-05T16:45:00Z",
        tags: &["CSS", "Layout", "Design"],
        image: "photo-1609619385005-bf44040c8d82",
    },
    Demo {
        id: "5",
        title: "Introduction to TypeScript",
        content: "TypeScript adds static typing to JavaScript, making code more robust and \
                  maintainable. This beginner-friendly introduction covers basic types, \
                  interfaces, classes, and generics. We'll also explore how TypeScript \
                  integrates with popular frameworks like React and Angular, and discuss the \
                  benefits it brings to large-scale applications.",
        author: "Eva Brown",
        created_at: "2024-01-02T11:30:00Z",
        tags: &["TypeScript", "JavaScript", "Programming"],
        image: "photo-1516116216624-53e697fedbea",
    },
];

fn fixture_time(id: &str, raw: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| {
            Error::Internal(format!(
                "Invalid timestamp {:?} for demo post {}: {}",
                raw, id, e
            ))
        })
}

/// Demo posts loaded at startup. Fails if a fixture timestamp is not valid
/// RFC 3339.
pub fn demo_posts() -> Result<Vec<Post>> {
    DEMO_POSTS
        .iter()
        .map(|demo| {
            let created_at = fixture_time(demo.id, demo.created_at)?;

            Ok(Post {
                id: demo.id.to_string(),
                title: demo.title.to_string(),
                content: demo.content.to_string(),
                author: demo.author.to_string(),
                created_at,
                updated_at: None,
                tags: demo.tags.iter().map(|t| t.to_string()).collect(),
                image_url: format!(
                    "https://images.unsplash.com/{}?w=800&h=400&fit=crop",
                    demo.image
                ),
            })
        })
        .collect()
}
