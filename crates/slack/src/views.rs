use serde::Serialize;

use crate::blocks::{
    Block, BlockElement, BlocksBuilder, ButtonElement, ButtonStyle, CheckboxesElement,
    PlainTextInputElement, TextObject, BUTTON_VALUE,
};

pub const SEARCH_ACTION_ID: &str = "term.search.v1";
pub const ADD_ACTION_ID: &str = "term.add.v1";
pub const TERM_EDIT_CALLBACK_ID: &str = "term.edit.modal.v1";

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum View {
    Home {
        blocks: Vec<Block>,
    },
    Modal {
        #[serde(skip_serializing_if = "Option::is_none")]
        callback_id: Option<String>,
        title: TextObject,
        #[serde(skip_serializing_if = "Option::is_none")]
        submit: Option<TextObject>,
        #[serde(skip_serializing_if = "Option::is_none")]
        close: Option<TextObject>,
        blocks: Vec<Block>,
    },
}

impl View {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Home { .. } => "home",
            Self::Modal { .. } => "modal",
        }
    }

    pub fn blocks(&self) -> &[Block] {
        match self {
            Self::Home { blocks } | Self::Modal { blocks, .. } => blocks,
        }
    }
}

/// Static App Home tab: a search box and an add-term form.
///
/// The same view is published for every user; nothing in it is personalized.
pub fn home_view() -> View {
    let blocks = BlocksBuilder::new()
        .header(
            "term.home.notice.v1",
            "⚠️こちらのアプリはテスト運用中です。お問い合わせには対応できません",
        )
        .divider("term.home.notice.divider.v1")
        .header("term.home.search.header.v1", "用語を検索する")
        .divider("term.home.search.divider.v1")
        .input("term.home.search.v1", |input| {
            input.label(" ").text_input(
                PlainTextInputElement::new("term.search.query.v1").placeholder("検索内容を入力してください"),
            );
        })
        .actions("term.home.search.actions.v1", |actions| {
            actions.button(
                ButtonElement::new(SEARCH_ACTION_ID, "検索")
                    .value(BUTTON_VALUE)
                    .style(ButtonStyle::Primary),
            );
        })
        .header("term.home.add.header.v1", "用語を追加する")
        .divider("term.home.add.divider.v1")
        .input("term.home.add.name.v1", |input| {
            input.label("正式名称 (※必須)").text_input(
                PlainTextInputElement::new("term.add.name.v1")
                    .placeholder("正式名称を入力してください(1~25文字)"),
            );
        })
        .input("term.home.add.reading.v1", |input| {
            input.label("読み方 (※必須)").text_input(
                PlainTextInputElement::new("term.add.reading.v1")
                    .placeholder("その用語の読み方をひらがなで入力してください(1~25文字)"),
            );
        })
        .input("term.home.add.aliases.v1", |input| {
            input
                .label("その他の呼称 (例:A,Bのようにカンマで区切ってください)")
                .text_input(PlainTextInputElement::new("term.add.aliases.v1").placeholder("例:呼称A,呼称B"));
        })
        .input("term.home.add.tags.v1", |input| {
            input.label("タグ(※1つ以上選択してください)").checkboxes(
                CheckboxesElement::new("term.add.tags.v1")
                    .option(TextObject::plain_emoji("社内用語"), "value-0")
                    .option(TextObject::plain_emoji("一般用語"), "value-1"),
            );
        })
        .input("term.home.add.meaning.v1", |input| {
            input.label("説明(※必須)").text_input(
                PlainTextInputElement::new("term.add.meaning.v1")
                    .multiline()
                    .placeholder("説明を入力してください(5~300文字)"),
            );
        })
        .actions("term.home.add.actions.v1", |actions| {
            actions.button(
                ButtonElement::new(ADD_ACTION_ID, "追加").value(BUTTON_VALUE).style(ButtonStyle::Danger),
            );
        })
        .build();

    View::Home { blocks }
}

pub fn term_edit_modal() -> View {
    let blocks = BlocksBuilder::new()
        .input("term.edit.name.v1", |input| {
            input.label("正式名称").dispatch_action().text_input(
                PlainTextInputElement::new("term.edit.name.input.v1").dispatch_on_character_entered(),
            );
        })
        .input("term.edit.reading.v1", |input| {
            input.label("読み方").text_input(PlainTextInputElement::new("term.edit.reading.input.v1"));
        })
        .input("term.edit.aliases.v1", |input| {
            input.label("その他の呼称").text_input(PlainTextInputElement::new("term.edit.aliases.input.v1"));
        })
        .section("term.edit.tags.v1", |section| {
            section.mrkdwn("タグ").accessory(BlockElement::Checkboxes(
                CheckboxesElement::new("term.edit.tags.input.v1")
                    .option(TextObject::mrkdwn("*社内用語*"), "value-0")
                    .option(TextObject::mrkdwn("*一般用語*"), "value-1"),
            ));
        })
        .input("term.edit.meaning.v1", |input| {
            input
                .label("説明")
                .text_input(PlainTextInputElement::new("term.edit.meaning.input.v1").multiline());
        })
        .build();

    View::Modal {
        callback_id: Some(TERM_EDIT_CALLBACK_ID.to_owned()),
        title: TextObject::plain_emoji("編集"),
        submit: Some(TextObject::plain_emoji("決定")),
        close: Some(TextObject::plain_emoji("キャンセル")),
        blocks,
    }
}
