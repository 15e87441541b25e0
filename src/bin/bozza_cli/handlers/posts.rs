#![deny(clippy::all, clippy::pedantic)]

use bozza::application::composer::ComposerService;
use bozza::domain::posts::{Category, DraftPatch, is_known_tag};

use crate::args::{CategoryArg, PostsCmd};
use crate::context::CliError;
use crate::print::print_json;

pub async fn handle(composer: &mut ComposerService, cmd: PostsCmd) -> Result<(), CliError> {
    match cmd {
        PostsCmd::Fetch => fetch(composer).await,
        PostsCmd::Compose {
            title,
            content,
            image,
            category,
            tags,
        } => {
            let input = ComposeInput {
                title,
                content,
                image,
                category,
                tags,
            };
            compose(composer, input).await
        }
        PostsCmd::Revise {
            index,
            title,
            content,
            image,
            category,
            tags,
        } => {
            let input = ReviseInput {
                index,
                title,
                content,
                image,
                category,
                tags,
            };
            revise(composer, input).await
        }
        PostsCmd::Remove { index } => remove(composer, index).await,
    }
}

struct ComposeInput {
    title: String,
    content: String,
    image: Option<String>,
    category: Option<CategoryArg>,
    tags: Vec<String>,
}

struct ReviseInput {
    index: usize,
    title: Option<String>,
    content: Option<String>,
    image: Option<String>,
    category: Option<CategoryArg>,
    tags: Vec<String>,
}

async fn fetch(composer: &mut ComposerService) -> Result<(), CliError> {
    composer.refresh().await;
    print_json(&composer.posts())
}

async fn compose(composer: &mut ComposerService, input: ComposeInput) -> Result<(), CliError> {
    check_tags(&input.tags)?;

    composer.refresh().await;
    composer.apply(DraftPatch::Title(input.title));
    composer.apply(DraftPatch::Content(input.content));
    if let Some(image) = input.image {
        composer.apply(DraftPatch::Image(image));
    }
    if let Some(category) = input.category {
        composer.apply(DraftPatch::Category(Some(category.into())));
    }
    for tag in &input.tags {
        composer.toggle_tag(tag);
    }
    composer.submit().await;

    print_json(&composer.posts())
}

async fn revise(composer: &mut ComposerService, input: ReviseInput) -> Result<(), CliError> {
    check_tags(&input.tags)?;

    composer.refresh().await;
    if input.index >= composer.posts().len() {
        return Err(CliError::InvalidInput(format!(
            "no post at index {}",
            input.index
        )));
    }

    composer.edit(input.index);
    if let Some(title) = input.title {
        composer.apply(DraftPatch::Title(title));
    }
    if let Some(content) = input.content {
        composer.apply(DraftPatch::Content(content));
    }
    if let Some(image) = input.image {
        composer.apply(DraftPatch::Image(image));
    }
    if let Some(category) = input.category {
        composer.apply(DraftPatch::Category(Some(category.into())));
    }
    for tag in &input.tags {
        composer.toggle_tag(tag);
    }
    composer.submit().await;

    print_json(&composer.posts())
}

async fn remove(composer: &mut ComposerService, index: usize) -> Result<(), CliError> {
    composer.refresh().await;
    if index >= composer.posts().len() {
        return Err(CliError::InvalidInput(format!("no post at index {index}")));
    }

    composer.remove(index).await;
    print_json(&composer.posts())
}

fn check_tags(tags: &[String]) -> Result<(), CliError> {
    for tag in tags {
        if !is_known_tag(tag) {
            return Err(CliError::InvalidInput(format!(
                "unknown tag `{tag}` (not in the fixed vocabulary)"
            )));
        }
    }
    Ok(())
}

impl From<CategoryArg> for Category {
    fn from(value: CategoryArg) -> Self {
        match value {
            CategoryArg::News => Category::News,
            CategoryArg::Sport => Category::Sport,
            CategoryArg::Entertainment => Category::Entertainment,
        }
    }
}
