use crate::{
    domain::{
        board::BoardConfig,
        card::{Card, CardId, CardView, Segment},
        filter::Filter,
        input_form::{InputForm, InputFormEvent},
    },
    error::{KanbanError, Result},
    interaction::{
        arena::{DropAreaArena, DropSlot},
        drop_area::DragOverOutcome,
    },
};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Messages a column's children send to the column
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnMessage {
    DragStarted(CardId),
    DragEnded,
    ToggleInput,
    CancelInput,
    InputChanged(String),
    ConfirmInput,
}

/// Effects the column hands to the external card store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnOutput {
    /// A note was confirmed in the add form; the store appends it
    NoteConfirmed(String),
    /// A drop landed on an enabled slot; the store performs the move
    DropRequested {
        card: Option<CardId>,
        slot: DropSlot,
    },
}

/// Native drag events delivered to a drop area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragEvent {
    Enter,
    Over,
    Drop,
}

/// What the host should do after routing a drag event
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DragResponse {
    /// Suppress the browser's default drop handling
    pub prevent_default: bool,
    pub output: Option<ColumnOutput>,
}

/// Transient interaction state of a column
#[derive(Debug, Clone, Default)]
pub struct ColumnState {
    dragging_card_id: Option<CardId>,
    input_mode: bool,
    text: String,
    card_views: HashMap<CardId, CardView>,
}

impl ColumnState {
    pub fn dragging_card_id(&self) -> Option<&CardId> {
        self.dragging_card_id.as_ref()
    }

    pub fn input_mode(&self) -> bool {
        self.input_mode
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn card_view(&self, id: &CardId) -> Option<&CardView> {
        self.card_views.get(id)
    }

    fn card_view_mut(&mut self, id: &CardId) -> &mut CardView {
        self.card_views
            .entry(id.clone())
            .or_insert_with(|| CardView::new(id.clone()))
    }

    /// The column's reducer
    pub fn apply(&mut self, message: ColumnMessage) -> Option<ColumnOutput> {
        match message {
            ColumnMessage::DragStarted(id) => {
                tracing::debug!(card = %id, "drag started");
                self.dragging_card_id = Some(id);
                None
            }
            ColumnMessage::DragEnded => {
                if let Some(id) = self.dragging_card_id.take() {
                    tracing::debug!(card = %id, "drag ended");
                }
                None
            }
            ColumnMessage::ToggleInput => {
                self.input_mode = !self.input_mode;
                None
            }
            ColumnMessage::CancelInput => {
                self.input_mode = false;
                None
            }
            ColumnMessage::InputChanged(text) => {
                self.text = text;
                None
            }
            ColumnMessage::ConfirmInput => {
                let text = std::mem::take(&mut self.text);
                tracing::debug!(len = text.len(), "note confirmed");
                Some(ColumnOutput::NoteConfirmed(text))
            }
        }
    }
}

/// Whether a drop slot is enabled for the current drag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotGate {
    pub slot: DropSlot,
    pub disabled: bool,
}

/// Computes the N+1 drop slots for `cards`, in render order.
///
/// While a card is being dragged, the slot directly above it and the slot
/// directly below it are disabled, since dropping there would not move it.
pub fn slot_gates(cards: &[&Card], dragging: Option<&CardId>) -> Vec<SlotGate> {
    let mut gates = Vec::with_capacity(cards.len() + 1);
    let mut previous: Option<&CardId> = None;

    for card in cards {
        let disabled =
            dragging.is_some_and(|d| &card.id == d || previous == Some(d));
        gates.push(SlotGate {
            slot: DropSlot::Before(card.id.clone()),
            disabled,
        });
        previous = Some(&card.id);
    }

    gates.push(SlotGate {
        slot: DropSlot::Trailing,
        disabled: dragging.is_some_and(|d| previous == Some(d)),
    });

    gates
}

/// A card as the host should paint it
#[derive(Debug, Clone, PartialEq)]
pub struct CardItem<'a> {
    pub card: &'a Card,
    pub segments: Vec<Segment<'a>>,
    pub opacity: Option<f32>,
    /// The drop slot rendered directly above this card
    pub gate: SlotGate,
}

impl CardItem<'_> {
    pub const HAS_CHECK_ICON: bool = true;
    pub const HAS_DELETE_BUTTON: bool = true;
}

/// Render model of a column
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnView<'a> {
    pub title: &'a str,
    pub total_count: usize,
    /// Set only while a filter is active
    pub result_count: Option<usize>,
    pub input: Option<InputForm>,
    pub cards: Vec<CardItem<'a>>,
    pub trailing: SlotGate,
}

impl ColumnView<'_> {
    pub fn result_label(&self) -> Option<String> {
        self.result_count.map(|n| format!("{} results", n))
    }

    /// Every slot in render order
    pub fn gates(&self) -> Vec<&SlotGate> {
        self.cards
            .iter()
            .map(|item| &item.gate)
            .chain(std::iter::once(&self.trailing))
            .collect()
    }
}

/// An ordered list of cards with a title and a search filter
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Column {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter_value: Option<String>,
    #[serde(default)]
    pub cards: Vec<Card>,
    #[serde(skip)]
    state: ColumnState,
}

impl Column {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    /// Builds a column, rejecting duplicate card IDs
    pub fn with_cards(title: impl Into<String>, cards: Vec<Card>) -> Result<Self> {
        let column = Self {
            cards,
            ..Self::new(title)
        };
        column.validate()?;
        Ok(column)
    }

    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for card in &self.cards {
            if !seen.insert(&card.id) {
                return Err(KanbanError::DuplicateCard(card.id.to_string()));
            }
        }
        Ok(())
    }

    pub fn state(&self) -> &ColumnState {
        &self.state
    }

    pub fn set_filter(&mut self, value: Option<String>) {
        self.filter_value = value;
    }

    pub fn filter(&self) -> Filter {
        Filter::parse(self.filter_value.as_deref())
    }

    pub fn visible_cards(&self) -> Vec<&Card> {
        self.filter().apply(&self.cards)
    }

    /// Appends a card, as the external store would after a confirmed note
    pub fn push_card(&mut self, card: Card) -> Result<()> {
        if self.cards.iter().any(|c| c.id == card.id) {
            return Err(KanbanError::DuplicateCard(card.id.to_string()));
        }
        self.cards.push(card);
        Ok(())
    }

    fn find_card(&self, id: &CardId) -> Result<()> {
        if self.cards.iter().any(|c| &c.id == id) {
            Ok(())
        } else {
            Err(KanbanError::CardNotFound(id.to_string()))
        }
    }

    pub fn apply(&mut self, message: ColumnMessage) -> Option<ColumnOutput> {
        self.state.apply(message)
    }

    /// Native drag start on a card: sets its own flag, then the column's
    pub fn card_drag_start(&mut self, id: &CardId) -> Result<()> {
        self.find_card(id)?;
        let message = self.state.card_view_mut(id).on_drag_start();
        self.state.apply(message);
        Ok(())
    }

    pub fn card_drag_end(&mut self, id: &CardId) -> Result<()> {
        self.find_card(id)?;
        let message = self.state.card_view_mut(id).on_drag_end();
        self.state.apply(message);
        Ok(())
    }

    /// Routes an add-form event into the reducer
    pub fn input_event(&mut self, event: InputFormEvent) -> Option<ColumnOutput> {
        let message = match event {
            InputFormEvent::Change(text) => ColumnMessage::InputChanged(text),
            InputFormEvent::Confirm => ColumnMessage::ConfirmInput,
            InputFormEvent::Cancel => ColumnMessage::CancelInput,
        };
        self.state.apply(message)
    }

    pub fn gates(&self) -> Vec<SlotGate> {
        slot_gates(&self.visible_cards(), self.state.dragging_card_id())
    }

    /// Slots that are not currently rendered count as disabled
    pub fn slot_disabled(&self, slot: &DropSlot) -> bool {
        self.gates()
            .into_iter()
            .find(|gate| &gate.slot == slot)
            .map_or(true, |gate| gate.disabled)
    }

    /// Forwards a native drag event to the slot's drop area, gated by the
    /// current drag session.
    pub fn drag_event(
        &self,
        arena: &mut DropAreaArena,
        slot: &DropSlot,
        event: DragEvent,
    ) -> DragResponse {
        let disabled = self.slot_disabled(slot);

        match event {
            DragEvent::Enter => {
                arena.drag_enter(slot, disabled);
                DragResponse::default()
            }
            DragEvent::Over => DragResponse {
                prevent_default: matches!(
                    arena.drag_over(slot, disabled),
                    DragOverOutcome::Accept(_)
                ),
                output: None,
            },
            DragEvent::Drop => {
                if !arena.drop(slot, disabled) {
                    return DragResponse::default();
                }
                tracing::debug!(slot = %slot, "drop requested");
                DragResponse {
                    prevent_default: true,
                    output: Some(ColumnOutput::DropRequested {
                        card: self.state.dragging_card_id.clone(),
                        slot: slot.clone(),
                    }),
                }
            }
        }
    }

    pub fn view(&self, config: &BoardConfig) -> ColumnView<'_> {
        let filter = self.filter();
        let cards = filter.apply(&self.cards);
        let mut gates = slot_gates(&cards, self.state.dragging_card_id());
        // slot_gates always yields a trailing gate
        let trailing = gates.pop().unwrap_or(SlotGate {
            slot: DropSlot::Trailing,
            disabled: false,
        });

        let total_count = cards.len();
        let items = cards
            .into_iter()
            .zip(gates)
            .map(|(card, gate)| CardItem {
                card,
                segments: card.segments(),
                opacity: self
                    .state
                    .card_view(&card.id)
                    .and_then(|v| v.opacity(config.drag_opacity)),
                gate,
            })
            .collect();

        ColumnView {
            title: self.title.as_deref().unwrap_or(""),
            total_count,
            result_count: filter.is_active().then_some(total_count),
            input: self
                .state
                .input_mode
                .then(|| InputForm::new(Some(self.state.text.clone()))),
            cards: items,
            trailing,
        }
    }
}
