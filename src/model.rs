//! # Domain Model: Notes and Their Contents
//!
//! This module defines the core data structures for nots: [`Note`],
//! [`ListItem`], and [`MediaBlob`].
//!
//! ## The Note Aggregate
//!
//! A [`Note`] is an ownership root. It exclusively owns its to-do list, its
//! checklist, its media attachments, and its reminder. Nothing outside the
//! note holds references into these collections; deleting a note drops all
//! of its contents with it, so orphaned items cannot exist.
//!
//! ## To-dos vs. Checklist
//!
//! The two lists are structurally identical ([`ListItem`] serves both) but
//! semantically distinct: they are independently ordered and independently
//! indexed. [`ListKind`] names which list an operation targets, and shows up
//! in out-of-range errors so callers can tell the lists apart.
//!
//! ## The Index-Shift Hazard
//!
//! List items are addressed by position, and removal shifts every later item
//! down by one. This is the one real correctness hazard in the model: a
//! caller that caches positions across mutations will act on the wrong item.
//! Presentation layers must recompute any index-keyed state after every
//! mutation, or key their widgets by note id + current position snapshot
//! taken at render time, never by a position captured earlier.
//!
//! ## Media Formats
//!
//! Attachments carry raw bytes plus a [`MediaFormat`] tag. Only a fixed
//! allow-list is accepted: png/jpg/jpeg for images, mp3/wav for audio.
//! [`MediaFormat::parse`] understands both bare extensions (`"png"`) and
//! MIME-style forms (`"image/png"`), case-insensitively. Content bytes are
//! opaque; no sniffing or decoding happens here.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{NotsError, Result};

/// Which of a note's two item lists an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ListKind {
    Todos,
    Checklist,
}

impl std::fmt::Display for ListKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListKind::Todos => write!(f, "to-do"),
            ListKind::Checklist => write!(f, "checklist"),
        }
    }
}

/// A single entry in a to-do list or checklist: text plus a done flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListItem {
    pub text: String,
    pub done: bool,
}

impl ListItem {
    /// Creates an unchecked item from non-blank text.
    ///
    /// The stored text is the trimmed form. Blank input (empty or
    /// whitespace-only) is rejected; `field` names the offending input in
    /// the error.
    pub fn new(text: &str, field: &'static str) -> Result<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(NotsError::EmptyInput(field));
        }
        Ok(Self {
            text: trimmed.to_string(),
            done: false,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaFormat {
    Png,
    Jpg,
    Jpeg,
    Mp3,
    Wav,
}

impl MediaFormat {
    /// Parses a content type against the allow-list.
    ///
    /// Accepts bare extensions (`"png"`, `"MP3"`) and MIME forms
    /// (`"image/jpeg"`, `"audio/wav"`). Anything else is
    /// [`NotsError::UnsupportedFormat`].
    pub fn parse(content_type: &str) -> Result<Self> {
        let normalized = content_type.trim().to_ascii_lowercase();
        let bare = normalized
            .strip_prefix("image/")
            .or_else(|| normalized.strip_prefix("audio/"))
            .unwrap_or(&normalized);

        match bare {
            "png" => Ok(Self::Png),
            "jpg" => Ok(Self::Jpg),
            "jpeg" => Ok(Self::Jpeg),
            "mp3" | "mpeg" => Ok(Self::Mp3),
            "wav" => Ok(Self::Wav),
            _ => Err(NotsError::UnsupportedFormat(content_type.to_string())),
        }
    }

    pub fn is_image(&self) -> bool {
        matches!(self, Self::Png | Self::Jpg | Self::Jpeg)
    }

    pub fn is_audio(&self) -> bool {
        matches!(self, Self::Mp3 | Self::Wav)
    }
}

/// An attached binary blob: raw bytes tagged with their format.
///
/// The bytes are opaque to the core; the presentation layer decides how to
/// render them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaBlob {
    pub format: MediaFormat,
    pub data: Vec<u8>,
}

impl MediaBlob {
    /// Builds an image attachment, rejecting non-image formats.
    pub fn image(content_type: &str, data: Vec<u8>) -> Result<Self> {
        let format = MediaFormat::parse(content_type)?;
        if !format.is_image() {
            return Err(NotsError::UnsupportedFormat(content_type.to_string()));
        }
        Ok(Self { format, data })
    }

    /// Builds an audio attachment, rejecting non-audio formats.
    pub fn audio(content_type: &str, data: Vec<u8>) -> Result<Self> {
        let format = MediaFormat::parse(content_type)?;
        if !format.is_audio() {
            return Err(NotsError::UnsupportedFormat(content_type.to_string()));
        }
        Ok(Self { format, data })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Note {
    pub id: Uuid,
    pub text: String,
    pub todos: Vec<ListItem>,
    pub checklist: Vec<ListItem>,
    pub images: Vec<MediaBlob>,
    pub audio: Vec<MediaBlob>,
    pub reminder: Option<NaiveDate>,
    // Set once at creation; never touched by mutation.
    pub created: DateTime<Utc>,
}

impl Note {
    /// Creates an empty note: no text, no items, no media, no reminder.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            text: String::new(),
            todos: Vec::new(),
            checklist: Vec::new(),
            images: Vec::new(),
            audio: Vec::new(),
            reminder: None,
            created: Utc::now(),
        }
    }

    fn list(&self, kind: ListKind) -> &Vec<ListItem> {
        match kind {
            ListKind::Todos => &self.todos,
            ListKind::Checklist => &self.checklist,
        }
    }

    fn list_mut(&mut self, kind: ListKind) -> &mut Vec<ListItem> {
        match kind {
            ListKind::Todos => &mut self.todos,
            ListKind::Checklist => &mut self.checklist,
        }
    }

    /// Appends an unchecked item to the given list.
    ///
    /// Blank text is rejected with [`NotsError::EmptyInput`] and leaves the
    /// list untouched.
    pub fn add_item(&mut self, kind: ListKind, text: &str) -> Result<()> {
        let field = match kind {
            ListKind::Todos => "to-do text",
            ListKind::Checklist => "checklist text",
        };
        let item = ListItem::new(text, field)?;
        self.list_mut(kind).push(item);
        Ok(())
    }

    /// Flips the done flag of the item at `index`.
    pub fn toggle_item(&mut self, kind: ListKind, index: usize) -> Result<()> {
        let len = self.list(kind).len();
        let item = self
            .list_mut(kind)
            .get_mut(index)
            .ok_or(NotsError::IndexOutOfRange {
                list: kind,
                index,
                len,
            })?;
        item.done = !item.done;
        Ok(())
    }

    /// Removes the item at `index`. Later items shift down by one.
    pub fn remove_item(&mut self, kind: ListKind, index: usize) -> Result<ListItem> {
        let len = self.list(kind).len();
        if index >= len {
            return Err(NotsError::IndexOutOfRange {
                list: kind,
                index,
                len,
            });
        }
        Ok(self.list_mut(kind).remove(index))
    }
}

impl Default for Note {
    fn default() -> Self {
        Self::new()
    }
}
