//! Create a new post document

use anyhow::Result;
use std::fs;

use crate::content::Language;
use crate::Akasha;

/// Scaffold a front-matter markdown document in the content directory
pub fn run(akasha: &Akasha, title: &str) -> Result<()> {
    let content_dir = akasha.content_dir();
    fs::create_dir_all(&content_dir)?;

    let slug = slug::slugify(title);
    let file_path = content_dir.join(format!("{}.md", slug));
    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    let date = chrono::Local::now().format("%Y-%m-%d");
    let content = format!(
        "---\n\
         id: {slug}\n\
         title_en: {title}\n\
         title_cn:\n\
         date: {date}\n\
         category: {category}\n\
         imageUrl:\n\
         ---\n\
         \n\
         ## {en}\n\
         \n\
         Write the English paragraphs here.\n\
         \n\
         ## {cn}\n\
         \n\
         在这里写中文段落。\n",
        category = akasha.config.default_category,
        en = Language::En.code(),
        cn = Language::Cn.code(),
    );

    fs::write(&file_path, content)?;
    println!("Created: {:?}", file_path);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::content::ContentLoader;

    #[test]
    fn test_scaffold_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let akasha = Akasha::with_config(SiteConfig::default(), dir.path());

        run(&akasha, "Singing to Aranara").unwrap();

        let posts = ContentLoader::new(&akasha).load_posts();
        assert_eq!(posts.len(), 1);
        let post = &posts[0];
        assert_eq!(post.id, "singing-to-aranara");
        assert_eq!(post.title.en, "Singing to Aranara");
        // Empty title_cn in metadata falls through to the cn section text
        assert_eq!(post.title.cn, "在这里写中文段落。");

        // A second scaffold with the same title collides
        assert!(run(&akasha, "Singing to Aranara").is_err());
    }
}
