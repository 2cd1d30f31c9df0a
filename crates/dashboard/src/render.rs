//! Pure rendering of table state into rows of text cells.

use core::fmt;

use serde::Serialize;
use serde_json::Value as JsonValue;

use meterops_core::RecordId;
use meterops_forecast::DemandTableView;
use meterops_records::{Align, Column, DemandRecord, Record};

use crate::state::{Notification, TableState};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RowAction {
    View,
    Edit,
    Delete,
}

impl RowAction {
    pub const ALL: [RowAction; 3] = [RowAction::View, RowAction::Edit, RowAction::Delete];

    fn as_str(self) -> &'static str {
        match self {
            RowAction::View => "view",
            RowAction::Edit => "edit",
            RowAction::Delete => "delete",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedRow {
    pub id: Option<RecordId>,
    pub cells: Vec<String>,
    /// Empty for forecast rows.
    pub actions: Vec<RowAction>,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedTable {
    pub title: &'static str,
    pub columns: &'static [Column],
    pub rows: Vec<RenderedRow>,
    pub notification: Option<Notification>,
}

impl RenderedTable {
    pub fn headers(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.columns.iter().map(|c| c.header)
    }
}

/// Render any record table.
pub fn render<R: Record>(state: &TableState<R>) -> RenderedTable {
    let d = R::descriptor();
    let rows = state
        .rows()
        .iter()
        .map(|stored| RenderedRow {
            id: Some(stored.id),
            cells: cells(d.columns, &stored.record, |c| c.field),
            actions: RowAction::ALL.to_vec(),
            selected: state.selected() == Some(stored.id),
        })
        .collect();

    RenderedTable {
        title: d.label,
        columns: d.columns,
        rows,
        notification: state.notification().cloned(),
    }
}

/// Render the demand table: history rows followed by the forecast rows.
pub fn render_demand(view: &DemandTableView, state: &TableState<DemandRecord>) -> RenderedTable {
    let rows = view
        .rows
        .iter()
        .map(|row| {
            let target = row.action_target();
            RenderedRow {
                id: target,
                cells: cells(view.columns, row, |c| c.accessor),
                actions: if target.is_some() { RowAction::ALL.to_vec() } else { Vec::new() },
                selected: target.is_some() && state.selected() == target,
            }
        })
        .collect();

    RenderedTable {
        title: DemandRecord::descriptor().label,
        columns: view.columns,
        rows,
        notification: state.notification().cloned(),
    }
}

// `key` picks the name the column's value is serialized under.
fn cells<T: Serialize>(columns: &[Column], value: &T, key: fn(&Column) -> &'static str) -> Vec<String> {
    let doc = match serde_json::to_value(value) {
        Ok(doc) => doc,
        Err(e) => {
            tracing::warn!(error = %e, "row could not be serialized, rendering blank cells");
            JsonValue::Null
        }
    };
    columns
        .iter()
        .map(|c| match doc.get(key(c)) {
            Some(JsonValue::String(s)) => s.clone(),
            Some(JsonValue::Null) | None => String::new(),
            Some(other) => other.to_string(),
        })
        .collect()
}

impl fmt::Display for RenderedTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let actions: Vec<String> = self
            .rows
            .iter()
            .map(|r| r.actions.iter().map(|a| a.as_str()).collect::<Vec<_>>().join(" "))
            .collect();

        let mut widths: Vec<usize> = self.columns.iter().map(|c| c.header.chars().count()).collect();
        for row in &self.rows {
            for (w, cell) in widths.iter_mut().zip(&row.cells) {
                *w = (*w).max(cell.chars().count());
            }
        }
        let action_width = actions
            .iter()
            .map(|a| a.chars().count())
            .chain(["Action".len()])
            .max()
            .unwrap_or(0);

        writeln!(f, "{}", self.title)?;

        write!(f, "  ")?;
        for (c, w) in self.columns.iter().zip(&widths) {
            pad(f, c.header, *w, c.align)?;
            write!(f, " | ")?;
        }
        writeln!(f, "{:<action_width$}", "Action")?;

        let rule = widths.iter().map(|w| w + 3).sum::<usize>() + action_width;
        writeln!(f, "  {}", "-".repeat(rule))?;

        for (row, action) in self.rows.iter().zip(&actions) {
            write!(f, "{}", if row.selected { "> " } else { "  " })?;
            for ((cell, c), w) in row.cells.iter().zip(self.columns).zip(&widths) {
                pad(f, cell, *w, c.align)?;
                write!(f, " | ")?;
            }
            writeln!(f, "{action}")?;
        }

        if let Some(n) = &self.notification {
            writeln!(f)?;
            writeln!(f, "{}", n.message)?;
        }
        Ok(())
    }
}

fn pad(f: &mut fmt::Formatter<'_>, text: &str, width: usize, align: Align) -> fmt::Result {
    match align {
        Align::Left => write!(f, "{text:<width$}"),
        Align::Center => write!(f, "{text:^width$}"),
    }
}
