//! Turns an advice payload into display sections.
//!
//! Pure data transform; presentation lives in [`crate::view`].

use advisor_api::{AdviceItem, AdvicePayload, Category, DestinationId};

pub const FOLLOW_UP_TITLE: &str = "Have a follow-up question?";
pub const FOLLOW_UP_PLACEHOLDER: &str =
    "Ask about specific interests, activities, or recommendations...";

/// One paragraph, as the lines that were separated by single line breaks.
pub type Paragraph = Vec<String>;

#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub category: Category,
    pub label: String,
    pub paragraphs: Vec<Paragraph>,
}

/// Trailing follow-up input, bound to the destination it was rendered for.
#[derive(Debug, Clone, PartialEq)]
pub struct FollowUpForm {
    pub destination_id: DestinationId,
    pub title: &'static str,
    pub placeholder: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderedAdvice {
    pub header: String,
    pub sections: Vec<Section>,
    pub follow_up: FollowUpForm,
}

/// The payload carried no advice items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyResult;

pub fn render(
    payload: &AdvicePayload,
    city: &str,
    country: &str,
) -> Result<RenderedAdvice, EmptyResult> {
    if payload.advice.is_empty() {
        return Err(EmptyResult);
    }

    let mut items: Vec<&AdviceItem> = payload.advice.iter().collect();
    // sort_by_key is stable, so passthrough categories keep payload order.
    items.sort_by_key(|item| item.category.rank().unwrap_or(usize::MAX));

    let sections = items
        .into_iter()
        .map(|item| Section {
            category: item.category.clone(),
            label: item.category.label().to_string(),
            paragraphs: split_paragraphs(item.content.as_deref()),
        })
        .collect();

    Ok(RenderedAdvice {
        header: format!("{city}, {country}"),
        sections,
        follow_up: FollowUpForm {
            destination_id: payload.id.clone(),
            title: FOLLOW_UP_TITLE,
            placeholder: FOLLOW_UP_PLACEHOLDER,
        },
    })
}

pub fn split_paragraphs(content: Option<&str>) -> Vec<Paragraph> {
    match content {
        None | Some("") => Vec::new(),
        Some(text) => text
            .split("\n\n")
            .map(|para| para.split('\n').map(str::to_string).collect::<Paragraph>())
            .collect(),
    }
}
