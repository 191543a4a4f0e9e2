use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct FrontMatter {
    pub slug: String,
    pub metadata: Metadata,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct Metadata {
    pub title: String,
    /// Drafts have no publication date.
    #[serde(
        default,
        deserialize_with = "naive_date_from_str",
        serialize_with = "naive_date_to_str"
    )]
    pub published_at: Option<chrono::NaiveDate>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub summary: Option<String>,
    /// Cover image, shown on the blog index and used as the preview image.
    #[serde(default)]
    pub image: Option<String>,
}

const DATE_FORMAT: &str = "%Y-%m-%d";

fn naive_date_from_str<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<chrono::NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Deserialize::deserialize(deserializer)?;
    match s.as_deref() {
        None | Some("null") | Some("") => Ok(None),
        Some(s) => Ok(Some(
            chrono::NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(serde::de::Error::custom)?,
        )),
    }
}

fn naive_date_to_str<S>(
    dt: &Option<chrono::NaiveDate>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match dt {
        Some(v) => serializer.serialize_some(&v.format(DATE_FORMAT).to_string()),
        None => serializer.serialize_none(),
    }
}

#[cfg(feature = "ssr")]
mod read {
    use std::path::{Path, PathBuf};

    use super::{FrontMatter, Metadata};
    use crate::store::{Error, Result};

    const BOUNDARY: &str = "---";

    /// Splits `contents` into its front matter and the markdown body that
    /// follows it. The front matter sits between two `---` lines, the first
    /// one being the first line of the file.
    pub(crate) fn split(contents: &str) -> Option<(&str, &str)> {
        let mut lines = contents.split_inclusive('\n');
        let first = lines.next()?;
        if first.trim_end() != BOUNDARY {
            return None;
        }

        let start = first.len();
        let mut offset = start;
        for line in lines {
            if line.trim_end() == BOUNDARY {
                return Some((&contents[start..offset], &contents[offset + line.len()..]));
            }
            offset += line.len();
        }
        None
    }

    /// `foo.md` is `foo`, `foo/post.md` is `foo`.
    pub(crate) fn slug_for(path: &Path) -> Option<String> {
        let stem = path.file_stem()?.to_str()?;
        let name = if stem == "post" {
            path.parent()?.file_name()?.to_str()?
        } else {
            stem
        };
        Some(slug::slugify(name))
    }

    impl FrontMatter {
        /// Reads the whole post at `path` and returns its front matter and
        /// markdown body.
        pub fn read(path: &Path) -> Result<(Self, String)> {
            let contents = std::fs::read_to_string(path).map_err(Error::io(path))?;
            let (front_matter, body) = Self::parse(&contents, path)?;
            let body = String::from(body);
            Ok((front_matter, body))
        }

        pub fn parse<'a>(contents: &'a str, path: &Path) -> Result<(Self, &'a str)> {
            let deserialize_error = |error: String| Error::Deserialize {
                error,
                path: PathBuf::from(path),
            };

            let (yaml, body) =
                split(contents).ok_or_else(|| deserialize_error(String::from("front matter is missing")))?;
            let metadata: Metadata = serde_yml::from_str(yaml)
                .map_err(|error| deserialize_error(format!("front matter is not valid YAML: {}", error)))?;
            let slug = slug_for(path)
                .ok_or_else(|| deserialize_error(String::from("file name is not valid utf-8")))?;

            Ok((Self { slug, metadata }, body))
        }
    }

}

#[cfg(feature = "ssr")]
pub(crate) use read::slug_for;
