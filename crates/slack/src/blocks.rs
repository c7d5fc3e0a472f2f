use serde::Serialize;
use yougo_core::TermCard;

pub const EDIT_BUTTON_ACTION_ID: &str = "button_click";
pub const OPEN_MODAL_ACTION_ID: &str = "open_modal";
pub const TERM_CARD_COLOR: &str = "#2D785B";
pub const BUTTON_VALUE: &str = "click_me_123";

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum TextObject {
    #[serde(rename = "plain_text")]
    Plain {
        text: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        emoji: Option<bool>,
    },
    #[serde(rename = "mrkdwn")]
    Mrkdwn { text: String },
}

impl TextObject {
    pub fn plain(text: impl Into<String>) -> Self {
        Self::Plain { text: text.into(), emoji: None }
    }

    pub fn plain_emoji(text: impl Into<String>) -> Self {
        Self::Plain { text: text.into(), emoji: Some(true) }
    }

    pub fn mrkdwn(text: impl Into<String>) -> Self {
        Self::Mrkdwn { text: text.into() }
    }

    pub fn text(&self) -> &str {
        match self {
            Self::Plain { text, .. } | Self::Mrkdwn { text } => text,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonStyle {
    Primary,
    Danger,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ButtonElement {
    pub action_id: String,
    pub text: TextObject,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<ButtonStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl ButtonElement {
    pub fn new(action_id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            action_id: action_id.into(),
            text: TextObject::plain_emoji(label),
            style: None,
            value: None,
        }
    }

    pub fn style(mut self, style: ButtonStyle) -> Self {
        self.style = Some(style);
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DispatchActionConfig {
    pub trigger_actions_on: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PlainTextInputElement {
    pub action_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<TextObject>,
    #[serde(skip_serializing_if = "is_false")]
    pub multiline: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dispatch_action_config: Option<DispatchActionConfig>,
}

impl PlainTextInputElement {
    pub fn new(action_id: impl Into<String>) -> Self {
        Self {
            action_id: action_id.into(),
            placeholder: None,
            multiline: false,
            dispatch_action_config: None,
        }
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(TextObject::plain(placeholder));
        self
    }

    pub fn multiline(mut self) -> Self {
        self.multiline = true;
        self
    }

    pub fn dispatch_on_character_entered(mut self) -> Self {
        self.dispatch_action_config = Some(DispatchActionConfig {
            trigger_actions_on: vec!["on_character_entered".to_owned()],
        });
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OptionObject {
    pub text: TextObject,
    pub value: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CheckboxesElement {
    pub action_id: String,
    pub options: Vec<OptionObject>,
}

impl CheckboxesElement {
    pub fn new(action_id: impl Into<String>) -> Self {
        Self { action_id: action_id.into(), options: Vec::new() }
    }

    pub fn option(mut self, text: TextObject, value: impl Into<String>) -> Self {
        self.options.push(OptionObject { text, value: value.into() });
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BlockElement {
    Button(ButtonElement),
    PlainTextInput(PlainTextInputElement),
    Checkboxes(CheckboxesElement),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Section {
        block_id: String,
        text: TextObject,
        #[serde(skip_serializing_if = "Option::is_none")]
        accessory: Option<BlockElement>,
    },
    Actions {
        block_id: String,
        elements: Vec<BlockElement>,
    },
    Header {
        block_id: String,
        text: TextObject,
    },
    Divider {
        block_id: String,
    },
    Input {
        block_id: String,
        label: TextObject,
        element: BlockElement,
        #[serde(skip_serializing_if = "is_false")]
        dispatch_action: bool,
    },
}

impl Block {
    pub fn block_id(&self) -> &str {
        match self {
            Self::Section { block_id, .. }
            | Self::Actions { block_id, .. }
            | Self::Header { block_id, .. }
            | Self::Divider { block_id }
            | Self::Input { block_id, .. } => block_id,
        }
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MessageTemplate {
    pub fallback_text: String,
    pub blocks: Vec<Block>,
}

impl MessageTemplate {
    pub fn new(fallback_text: impl Into<String>, blocks: Vec<Block>) -> Self {
        Self { fallback_text: fallback_text.into(), blocks }
    }
}

/// Legacy secondary attachment; Slack renders `color` as a side bar.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Attachment {
    pub color: String,
    pub blocks: Vec<Block>,
}

#[derive(Default)]
pub struct BlocksBuilder {
    blocks: Vec<Block>,
}

impl BlocksBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn section<F>(mut self, block_id: impl Into<String>, build: F) -> Self
    where
        F: FnOnce(&mut SectionBuilder),
    {
        let mut builder = SectionBuilder::default();
        build(&mut builder);
        let (text, accessory) = builder.build();
        self.blocks.push(Block::Section { block_id: block_id.into(), text, accessory });
        self
    }

    pub fn actions<F>(mut self, block_id: impl Into<String>, build: F) -> Self
    where
        F: FnOnce(&mut ActionsBuilder),
    {
        let mut builder = ActionsBuilder::default();
        build(&mut builder);
        self.blocks.push(Block::Actions { block_id: block_id.into(), elements: builder.build() });
        self
    }

    pub fn header(mut self, block_id: impl Into<String>, text: impl Into<String>) -> Self {
        self.blocks.push(Block::Header { block_id: block_id.into(), text: TextObject::plain_emoji(text) });
        self
    }

    pub fn divider(mut self, block_id: impl Into<String>) -> Self {
        self.blocks.push(Block::Divider { block_id: block_id.into() });
        self
    }

    pub fn input<F>(mut self, block_id: impl Into<String>, build: F) -> Self
    where
        F: FnOnce(&mut InputBuilder),
    {
        let mut builder = InputBuilder::default();
        build(&mut builder);
        let (label, element, dispatch_action) = builder.build();
        self.blocks.push(Block::Input { block_id: block_id.into(), label, element, dispatch_action });
        self
    }

    pub fn build(self) -> Vec<Block> {
        self.blocks
    }
}

#[derive(Default)]
pub struct SectionBuilder {
    text: Option<TextObject>,
    accessory: Option<BlockElement>,
}

impl SectionBuilder {
    pub fn mrkdwn(&mut self, text: impl Into<String>) -> &mut Self {
        self.text = Some(TextObject::mrkdwn(text));
        self
    }

    pub fn accessory(&mut self, element: BlockElement) -> &mut Self {
        self.accessory = Some(element);
        self
    }

    fn build(self) -> (TextObject, Option<BlockElement>) {
        (self.text.unwrap_or_else(|| TextObject::plain("")), self.accessory)
    }
}

#[derive(Default)]
pub struct ActionsBuilder {
    elements: Vec<BlockElement>,
}

impl ActionsBuilder {
    pub fn button(&mut self, button: ButtonElement) -> &mut Self {
        self.elements.push(BlockElement::Button(button));
        self
    }

    fn build(self) -> Vec<BlockElement> {
        self.elements
    }
}

#[derive(Default)]
pub struct InputBuilder {
    label: Option<TextObject>,
    element: Option<BlockElement>,
    dispatch_action: bool,
}

impl InputBuilder {
    pub fn label(&mut self, text: impl Into<String>) -> &mut Self {
        self.label = Some(TextObject::plain_emoji(text));
        self
    }

    pub fn text_input(&mut self, input: PlainTextInputElement) -> &mut Self {
        self.element = Some(BlockElement::PlainTextInput(input));
        self
    }

    pub fn checkboxes(&mut self, checkboxes: CheckboxesElement) -> &mut Self {
        self.element = Some(BlockElement::Checkboxes(checkboxes));
        self
    }

    pub fn dispatch_action(&mut self) -> &mut Self {
        self.dispatch_action = true;
        self
    }

    fn build(self) -> (TextObject, BlockElement, bool) {
        let label = self.label.unwrap_or_else(|| TextObject::plain(" "));
        let element = self.element.unwrap_or_else(|| {
            BlockElement::PlainTextInput(PlainTextInputElement::new("plain_text_input-action"))
        });
        (label, element, self.dispatch_action)
    }
}

pub fn scold_message(user_id: &str) -> MessageTemplate {
    let text = format!("うるせっぞ <@{user_id}>! ");
    let blocks = BlocksBuilder::new()
        .section("term.scold.v1", |section| {
            section
                .mrkdwn(text.clone())
                .accessory(BlockElement::Button(ButtonElement::new(EDIT_BUTTON_ACTION_ID, "編集")));
        })
        .build();
    MessageTemplate::new(text, blocks)
}

pub fn farewell_text(user_id: &str) -> String {
    format!("おやすみ〜, <@{user_id}> :wave:")
}

pub fn button_thanks_text(user_id: &str) -> String {
    format!("<@{user_id}> ボタン押してくれてありがっと！")
}

pub fn term_card_attachment(card: &TermCard) -> Attachment {
    let blocks = BlocksBuilder::new()
        .section("term.card.summary.v1", |section| {
            section.mrkdwn(card.summary_mrkdwn());
        })
        .actions("term.card.actions.v1", |actions| {
            actions.button(
                ButtonElement::new(OPEN_MODAL_ACTION_ID, "編集")
                    .style(ButtonStyle::Primary)
                    .value(BUTTON_VALUE),
            );
        })
        .build();
    Attachment { color: TERM_CARD_COLOR.to_owned(), blocks }
}
