#[cfg(feature = "ssr")]
pub mod errors;
mod front_matter;
mod post;

#[cfg(feature = "ssr")]
pub use errors::{Error, Result};
pub use front_matter::{FrontMatter, Metadata};
pub use post::{Heading, Post};

#[cfg(feature = "ssr")]
use std::path::{Path, PathBuf};

/// Blog posts: a directory of markdown files (`slug.md`, or `slug/post.md`
/// when a post comes with assets), each starting with a YAML front matter.
#[cfg(feature = "ssr")]
#[derive(Clone, Debug)]
pub struct Store {
    path: PathBuf,
    is_running_in_prod: bool,
}

#[cfg(feature = "ssr")]
impl Store {
    pub fn new(path: PathBuf, is_running_in_prod: bool) -> Self {
        Self {
            path,
            is_running_in_prod,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn post_files(&self) -> Result<Vec<PathBuf>> {
        let mut files = vec![];

        let directory = self.path.read_dir().map_err(Error::io(&self.path))?;
        for entry in directory {
            let entry = entry.map_err(Error::io(&self.path))?;
            let file_type = entry.file_type().map_err(Error::io(&self.path))?;
            if entry.file_name().to_str().is_none() {
                log::warn!("Invalid utf-8 filename in the store: {:?}", entry.file_name());
                continue;
            }
            let path = if file_type.is_dir() {
                let mut path = entry.path();
                path.push("post.md");
                if !path.is_file() {
                    continue;
                }
                path
            } else {
                let path = entry.path();
                if path.extension().and_then(|ext| ext.to_str()) != Some("md") {
                    continue;
                }
                path
            };
            files.push(path);
        }

        Ok(files)
    }

    /// Front matters of every post, newest first. Drafts (no publication
    /// date) come last and are hidden in production.
    pub fn index(&self) -> Result<Vec<FrontMatter>> {
        let mut index = vec![];
        for path in self.post_files()? {
            let (front_matter, _) = FrontMatter::read(&path)?;
            if !self.is_running_in_prod || front_matter.metadata.published_at.is_some() {
                index.push(front_matter);
            }
        }

        index.sort_by(|lhs, rhs| {
            use core::cmp::Ordering;
            match (lhs.metadata.published_at, rhs.metadata.published_at) {
                (Some(lhd), Some(rhd)) => rhd.cmp(&lhd).then_with(|| lhs.slug.cmp(&rhs.slug)),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => lhs.slug.cmp(&rhs.slug),
            }
        });

        Ok(index)
    }

    /// The `start..=end` posts of the index, counting from 1.
    pub fn range(&self, start: usize, end: usize) -> Result<Vec<FrontMatter>> {
        let skip = start.saturating_sub(1);
        Ok(self
            .index()?
            .into_iter()
            .skip(skip)
            .take((end + 1).saturating_sub(start.max(1)))
            .collect())
    }

    pub fn get_post_by_slug(&self, slug: &str) -> Result<Post> {
        let not_found = || Error::NotFound {
            slug: String::from(slug),
        };

        let path = self
            .post_files()?
            .into_iter()
            .find(|path| front_matter::slug_for(path).as_deref() == Some(slug))
            .ok_or_else(not_found)?;
        log::info!("slug \"{}\" points to file {:?}", slug, path);

        let post = post::render(&path)?;
        if self.is_running_in_prod && post.front_matter.metadata.published_at.is_none() {
            return Err(not_found());
        }
        Ok(post)
    }
}
