use crate::constants::{BUTTON_ABSTAIN, BUTTON_ENDORSE, BUTTON_INSTALL};
use crate::dashlet::DashletRow;
use crate::model::ExtensionDescriptor;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::ListItem as RatatuiListItem,
};

/// Trait for rows that can be displayed in the dashlet list
pub trait ListItem {
    /// Render this item as a ratatui ListItem
    fn render(&self, selected: bool, show_image: bool) -> RatatuiListItem<'static>;

    /// Text of the controls this row offers, in display order
    fn controls(&self) -> Vec<&'static str>;
}

/// Rows of the dashlet list
#[derive(Debug, Clone)]
pub enum DashletListItemType {
    Available(AvailableExtensionItem),
    Endorse(EndorseItem),
}

impl DashletListItemType {
    pub fn from_row(row: &DashletRow<'_>) -> Self {
        match row {
            DashletRow::Available(ext) => Self::Available(AvailableExtensionItem::new((*ext).clone())),
            DashletRow::Endorse { ext_id, extension } => {
                Self::Endorse(EndorseItem::new(ext_id.clone(), (*extension).clone()))
            }
        }
    }

    pub fn extension(&self) -> &ExtensionDescriptor {
        match self {
            Self::Available(item) => &item.extension,
            Self::Endorse(item) => &item.extension,
        }
    }
}

impl ListItem for DashletListItemType {
    fn render(&self, selected: bool, show_image: bool) -> RatatuiListItem<'static> {
        match self {
            Self::Available(item) => item.render(selected, show_image),
            Self::Endorse(item) => item.render(selected, show_image),
        }
    }

    fn controls(&self) -> Vec<&'static str> {
        match self {
            Self::Available(item) => item.controls(),
            Self::Endorse(item) => item.controls(),
        }
    }
}

fn type_badge(extension: &ExtensionDescriptor) -> Span<'static> {
    Span::styled(
        format!("[{}]", extension.type_label()),
        Style::default().fg(Color::Black).bg(Color::LightBlue).add_modifier(Modifier::BOLD),
    )
}

fn button(label: &'static str, selected: bool) -> Span<'static> {
    let style = if selected {
        Style::default().fg(Color::Black).bg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };
    Span::styled(format!("[ {} ]", label), style)
}

/// Buttons for `controls`, separated by a space
fn buttons(controls: Vec<&'static str>, selected: bool) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    for (i, label) in controls.into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(button(label, selected));
    }
    spans
}

fn name_style(selected: bool) -> Style {
    if selected {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }
}

fn image_line(extension: &ExtensionDescriptor) -> Line<'static> {
    Line::from(Span::styled(
        format!("  🖼 {}", extension.image),
        Style::default().fg(Color::DarkGray),
    ))
}

/// A newly available extension with its Install control
#[derive(Debug, Clone)]
pub struct AvailableExtensionItem {
    pub extension: ExtensionDescriptor,
}

impl AvailableExtensionItem {
    pub fn new(extension: ExtensionDescriptor) -> Self {
        Self { extension }
    }
}

impl ListItem for AvailableExtensionItem {
    fn render(&self, selected: bool, show_image: bool) -> RatatuiListItem<'static> {
        let ext = &self.extension;

        let mut header = vec![
            type_badge(ext),
            Span::raw(" "),
            Span::styled(ext.name.clone(), name_style(selected).add_modifier(Modifier::UNDERLINED)),
        ];
        if let Some(url) = ext.nexus_url() {
            header.push(Span::raw(" "));
            header.push(Span::styled(format!("<{}>", url), Style::default().fg(Color::Cyan)));
        }

        let mut lines = vec![Line::from(header)];
        if !ext.description.short.is_empty() {
            lines.push(Line::from(Span::styled(
                format!("  {}", ext.description.short),
                Style::default().fg(Color::Gray),
            )));
        }
        let mut footer = vec![
            Span::styled(format!("  👤 By {}", ext.author), Style::default().fg(Color::Gray)),
            Span::raw("  "),
        ];
        footer.extend(buttons(self.controls(), selected));
        lines.push(Line::from(footer));
        if show_image && !ext.image.is_empty() {
            lines.push(image_line(ext));
        }

        RatatuiListItem::new(lines)
    }

    fn controls(&self) -> Vec<&'static str> {
        vec![BUTTON_INSTALL]
    }
}

/// An installed extension waiting for an endorse/abstain decision
#[derive(Debug, Clone)]
pub struct EndorseItem {
    pub ext_id: String,
    pub extension: ExtensionDescriptor,
}

impl EndorseItem {
    pub fn new(ext_id: String, extension: ExtensionDescriptor) -> Self {
        Self { ext_id, extension }
    }
}

impl ListItem for EndorseItem {
    fn render(&self, selected: bool, show_image: bool) -> RatatuiListItem<'static> {
        let ext = &self.extension;

        let mut lines = vec![
            Line::from(vec![
                type_badge(ext),
                Span::raw(" "),
                Span::styled(ext.name.clone(), name_style(selected)),
            ]),
            Line::from([vec![Span::raw("  ")], buttons(self.controls(), selected)].concat()),
        ];
        if show_image && !ext.image.is_empty() {
            lines.push(image_line(ext));
        }

        RatatuiListItem::new(lines)
    }

    fn controls(&self) -> Vec<&'static str> {
        vec![BUTTON_ENDORSE, BUTTON_ABSTAIN]
    }
}
