//! Show a single post

use anyhow::Result;

use crate::content::Language;
use crate::Akasha;

/// Print one post, selected by id, in the requested language
pub fn run(akasha: &Akasha, id: &str, lang: Language) -> Result<()> {
    let posts = akasha.load_posts();
    let Some(post) = posts.iter().find(|p| p.id == id) else {
        anyhow::bail!("No post with id: {}", id);
    };

    println!("{}", post.title.get(lang));
    println!("{} · {}", post.date, post.category);
    println!();
    for paragraph in post.content.get(lang) {
        println!("{}", paragraph);
        println!();
    }

    Ok(())
}
