//! List site content

use anyhow::Result;
use std::collections::HashMap;

use crate::content::Language;
use crate::Akasha;

/// List site content by type
pub fn run(akasha: &Akasha, content_type: &str, lang: Language) -> Result<()> {
    match content_type {
        "post" | "posts" => {
            let posts = akasha.load_posts();
            println!("Posts ({}):", posts.len());
            for post in posts {
                println!(
                    "  {} - {} [{}] ({})",
                    post.date,
                    post.title.get(lang),
                    post.id,
                    post.category
                );
            }
        }
        "category" | "categories" => {
            let posts = akasha.load_posts();
            let mut categories: HashMap<String, usize> = HashMap::new();
            for post in &posts {
                *categories.entry(post.category.clone()).or_insert(0) += 1;
            }
            println!("Categories ({}):", categories.len());
            let mut categories: Vec<_> = categories.into_iter().collect();
            categories.sort_by(|a, b| b.1.cmp(&a.1));
            for (category, count) in categories {
                println!("  {} ({})", category, count);
            }
        }
        _ => {
            anyhow::bail!("Unknown type: {}. Available: post, category", content_type);
        }
    }

    Ok(())
}
