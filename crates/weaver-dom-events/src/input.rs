//! `inputType` introspection.
//!
//! Input events reach component code either raw or wrapped by a UI
//! framework's synthetic event (which exposes the raw one as
//! `nativeEvent`). Both shapes are read the same way here.

use js_sys::Reflect;
use wasm_bindgen::JsValue;

/// W3C Input Events `inputType` values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputType {
    // === Insertion ===
    InsertText,
    InsertReplacementText,
    InsertLineBreak,
    InsertParagraph,
    InsertOrderedList,
    InsertUnorderedList,
    InsertHorizontalRule,
    InsertFromYank,
    InsertFromDrop,
    InsertFromPaste,
    InsertFromPasteAsQuotation,
    InsertTranspose,
    InsertCompositionText,
    InsertFromComposition,
    InsertLink,

    // === Deletion ===
    DeleteWordBackward,
    DeleteWordForward,
    DeleteSoftLineBackward,
    DeleteSoftLineForward,
    DeleteEntireSoftLine,
    DeleteHardLineBackward,
    DeleteHardLineForward,
    DeleteByDrag,
    DeleteByCut,
    DeleteContent,
    DeleteContentBackward,
    DeleteContentForward,
    DeleteByComposition,
    DeleteCompositionText,

    // === History ===
    HistoryUndo,
    HistoryRedo,

    // === Formatting ===
    FormatBold,
    FormatItalic,
    FormatUnderline,
    FormatStrikeThrough,
    FormatSuperscript,
    FormatSubscript,
    FormatJustifyFull,
    FormatJustifyCenter,
    FormatJustifyRight,
    FormatJustifyLeft,
    FormatIndent,
    FormatOutdent,
    FormatRemove,
    FormatSetBlockTextDirection,
    FormatSetInlineTextDirection,
    FormatBackColor,
    FormatFontColor,
    FormatFontName,

    /// Anything a browser sends that isn't listed above.
    Unknown(String),
}

impl InputType {
    /// Parse a browser `inputType` string.
    pub fn from_browser(s: &str) -> Self {
        match s {
            "insertText" => Self::InsertText,
            "insertReplacementText" => Self::InsertReplacementText,
            "insertLineBreak" => Self::InsertLineBreak,
            "insertParagraph" => Self::InsertParagraph,
            "insertOrderedList" => Self::InsertOrderedList,
            "insertUnorderedList" => Self::InsertUnorderedList,
            "insertHorizontalRule" => Self::InsertHorizontalRule,
            "insertFromYank" => Self::InsertFromYank,
            "insertFromDrop" => Self::InsertFromDrop,
            "insertFromPaste" => Self::InsertFromPaste,
            "insertFromPasteAsQuotation" => Self::InsertFromPasteAsQuotation,
            "insertTranspose" => Self::InsertTranspose,
            "insertCompositionText" => Self::InsertCompositionText,
            "insertFromComposition" => Self::InsertFromComposition,
            "insertLink" => Self::InsertLink,

            "deleteWordBackward" => Self::DeleteWordBackward,
            "deleteWordForward" => Self::DeleteWordForward,
            "deleteSoftLineBackward" => Self::DeleteSoftLineBackward,
            "deleteSoftLineForward" => Self::DeleteSoftLineForward,
            "deleteEntireSoftLine" => Self::DeleteEntireSoftLine,
            "deleteHardLineBackward" => Self::DeleteHardLineBackward,
            "deleteHardLineForward" => Self::DeleteHardLineForward,
            "deleteByDrag" => Self::DeleteByDrag,
            "deleteByCut" => Self::DeleteByCut,
            "deleteContent" => Self::DeleteContent,
            "deleteContentBackward" => Self::DeleteContentBackward,
            "deleteContentForward" => Self::DeleteContentForward,
            "deleteByComposition" => Self::DeleteByComposition,
            "deleteCompositionText" => Self::DeleteCompositionText,

            "historyUndo" => Self::HistoryUndo,
            "historyRedo" => Self::HistoryRedo,

            "formatBold" => Self::FormatBold,
            "formatItalic" => Self::FormatItalic,
            "formatUnderline" => Self::FormatUnderline,
            "formatStrikeThrough" => Self::FormatStrikeThrough,
            "formatSuperscript" => Self::FormatSuperscript,
            "formatSubscript" => Self::FormatSubscript,
            "formatJustifyFull" => Self::FormatJustifyFull,
            "formatJustifyCenter" => Self::FormatJustifyCenter,
            "formatJustifyRight" => Self::FormatJustifyRight,
            "formatJustifyLeft" => Self::FormatJustifyLeft,
            "formatIndent" => Self::FormatIndent,
            "formatOutdent" => Self::FormatOutdent,
            "formatRemove" => Self::FormatRemove,
            "formatSetBlockTextDirection" => Self::FormatSetBlockTextDirection,
            "formatSetInlineTextDirection" => Self::FormatSetInlineTextDirection,
            "formatBackColor" => Self::FormatBackColor,
            "formatFontColor" => Self::FormatFontColor,
            "formatFontName" => Self::FormatFontName,

            other => Self::Unknown(other.to_string()),
        }
    }

    pub fn is_insertion(&self) -> bool {
        matches!(
            self,
            Self::InsertText
                | Self::InsertReplacementText
                | Self::InsertLineBreak
                | Self::InsertParagraph
                | Self::InsertOrderedList
                | Self::InsertUnorderedList
                | Self::InsertHorizontalRule
                | Self::InsertFromYank
                | Self::InsertFromDrop
                | Self::InsertFromPaste
                | Self::InsertFromPasteAsQuotation
                | Self::InsertTranspose
                | Self::InsertCompositionText
                | Self::InsertFromComposition
                | Self::InsertLink
        )
    }

    pub fn is_deletion(&self) -> bool {
        matches!(
            self,
            Self::DeleteWordBackward
                | Self::DeleteWordForward
                | Self::DeleteSoftLineBackward
                | Self::DeleteSoftLineForward
                | Self::DeleteEntireSoftLine
                | Self::DeleteHardLineBackward
                | Self::DeleteHardLineForward
                | Self::DeleteByDrag
                | Self::DeleteByCut
                | Self::DeleteContent
                | Self::DeleteContentBackward
                | Self::DeleteContentForward
                | Self::DeleteByComposition
                | Self::DeleteCompositionText
        )
    }

    pub fn is_history(&self) -> bool {
        matches!(self, Self::HistoryUndo | Self::HistoryRedo)
    }

    pub fn is_formatting(&self) -> bool {
        matches!(
            self,
            Self::FormatBold
                | Self::FormatItalic
                | Self::FormatUnderline
                | Self::FormatStrikeThrough
                | Self::FormatSuperscript
                | Self::FormatSubscript
                | Self::FormatJustifyFull
                | Self::FormatJustifyCenter
                | Self::FormatJustifyRight
                | Self::FormatJustifyLeft
                | Self::FormatIndent
                | Self::FormatOutdent
                | Self::FormatRemove
                | Self::FormatSetBlockTextDirection
                | Self::FormatSetInlineTextDirection
                | Self::FormatBackColor
                | Self::FormatFontColor
                | Self::FormatFontName
        )
    }
}

/// Read the `inputType` of an event, unwrapping `nativeEvent` if present.
///
/// Returns `None` when the value isn't an object, has no `inputType`, or the
/// field isn't a string.
pub fn input_type(event: &JsValue) -> Option<String> {
    if !event.is_object() {
        return None;
    }
    let native = match Reflect::has(event, &JsValue::from_str("nativeEvent")) {
        Ok(true) => Reflect::get(event, &JsValue::from_str("nativeEvent")).ok()?,
        _ => event.clone(),
    };
    if !native.is_object() {
        return None;
    }
    Reflect::get(&native, &JsValue::from_str("inputType"))
        .ok()?
        .as_string()
}

/// Parsed form of [`input_type`].
pub fn input_kind(event: &JsValue) -> Option<InputType> {
    input_type(event).map(|s| InputType::from_browser(&s))
}

/// Read the `inputType` behind a Dioxus form/input event.
#[cfg(feature = "dioxus")]
pub fn input_type_of(evt: &dioxus_core::Event<dioxus_html::FormData>) -> Option<String> {
    use dioxus_web::WebEventExt;

    let web_event = evt.try_as_web_event()?;
    input_type(&web_event)
}
