//! Weekly grid layout: maps schedule slots onto hourly bucket rows.
//!
//! The grid runs Monday to Sunday across, and one row per hour from the
//! first to the last bucket hour (07:00 to 19:00 by default, 13 rows).
//! A slot is drawn in every cell whose bucket time falls inside its
//! half-open interval; each drawing is positioned relative to its own row
//! so that the pieces line up into one continuous block.
//!
//! Overlapping slots on the same day are laid out side by side. Lanes are
//! assigned greedily in input order and every slot in an overlap cluster
//! reports the cluster's lane count.

use crate::domain::schedule::{DayOfWeek, ScheduleSlot, TimeOfDay};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridDefinition {
    pub first_hour: u8,
    pub last_hour: u8,
    pub row_height_px: f64,
}

impl Default for GridDefinition {
    fn default() -> Self {
        Self {
            first_hour: 7,
            last_hour: 19,
            row_height_px: 60.0,
        }
    }
}

impl GridDefinition {
    pub fn with_row_height(row_height_px: f64) -> Self {
        Self {
            row_height_px,
            ..Self::default()
        }
    }

    pub fn bucket_count(&self) -> usize {
        usize::from(self.last_hour.saturating_sub(self.first_hour)) + 1
    }

    pub fn bucket_time(&self, bucket_index: usize) -> Option<TimeOfDay> {
        if bucket_index >= self.bucket_count() {
            return None;
        }
        let hour = u8::try_from(usize::from(self.first_hour) + bucket_index).ok()?;
        TimeOfDay::from_hm(hour, 0).ok()
    }

    pub fn buckets(&self) -> impl Iterator<Item = (usize, TimeOfDay)> + '_ {
        (0..self.bucket_count()).filter_map(|i| self.bucket_time(i).map(|t| (i, t)))
    }

    fn px_per_minute(&self) -> f64 {
        self.row_height_px / 60.0
    }

    /// Block height: the slot's duration at the row scale
    pub fn slot_height(&self, slot: &ScheduleSlot) -> f64 {
        f64::from(slot.duration_minutes()) * self.px_per_minute()
    }

    /// Distance of the slot's start from the grid origin
    pub fn slot_top(&self, slot: &ScheduleSlot) -> f64 {
        let origin = i64::from(self.first_hour) * 60;
        let start = i64::from(slot.start_time.minutes_since_midnight());
        (start - origin) as f64 * self.px_per_minute()
    }

    /// Slot top re-based onto the given bucket row; negative once the row
    /// lies below the slot's start.
    pub fn slot_offset(&self, slot: &ScheduleSlot, bucket_index: usize) -> f64 {
        self.slot_top(slot) - bucket_index as f64 * self.row_height_px
    }
}

/// Slots present in the (day, bucket) cell, in input order
pub fn slots_in_cell(
    slots: &[ScheduleSlot],
    day: DayOfWeek,
    bucket: TimeOfDay,
) -> impl Iterator<Item = (usize, &ScheduleSlot)> {
    slots
        .iter()
        .enumerate()
        .filter(move |(_, slot)| slot.day == day && slot.covers(bucket))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lane {
    pub lane: usize,
    pub lanes: usize,
}

fn find_root(parent: &mut [usize], mut i: usize) -> usize {
    while parent[i] != i {
        parent[i] = parent[parent[i]];
        i = parent[i];
    }
    i
}

/// Side-by-side lanes for overlapping slots, indexed like `slots`
pub fn assign_lanes(slots: &[ScheduleSlot]) -> Vec<Lane> {
    let n = slots.len();
    let mut lane = vec![0usize; n];
    let mut parent: Vec<usize> = (0..n).collect();

    for i in 0..n {
        let mut taken = Vec::new();
        for j in 0..i {
            if slots[j].overlaps(&slots[i]) {
                taken.push(lane[j]);
                let (a, b) = (find_root(&mut parent, i), find_root(&mut parent, j));
                parent[a] = b;
            }
        }

        let mut candidate = 0;
        while taken.contains(&candidate) {
            candidate += 1;
        }
        lane[i] = candidate;
    }

    let mut width = vec![0usize; n];
    for i in 0..n {
        let root = find_root(&mut parent, i);
        width[root] = width[root].max(lane[i] + 1);
    }

    (0..n)
        .map(|i| Lane {
            lane: lane[i],
            lanes: width[find_root(&mut parent, i)],
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Placement {
    pub slot_id: String,
    pub subject: String,
    pub session_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_count: Option<u32>,
    pub color: String,
    pub start_time: String,
    pub end_time: String,
    pub height: f64,
    pub top: f64,
    pub lane: usize,
    pub lanes: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct GridCell {
    pub day: DayOfWeek,
    pub placements: Vec<Placement>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GridRow {
    pub bucket_index: usize,
    pub time: String,
    pub cells: Vec<GridCell>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleGrid {
    pub row_height: f64,
    pub days: Vec<DayOfWeek>,
    pub rows: Vec<GridRow>,
}

impl ScheduleGrid {
    pub fn cell(&self, day: DayOfWeek, bucket_index: usize) -> Option<&GridCell> {
        self.rows
            .get(bucket_index)?
            .cells
            .iter()
            .find(|cell| cell.day == day)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ScheduleLayoutEngine {
    grid: GridDefinition,
}

impl ScheduleLayoutEngine {
    pub fn new(grid: GridDefinition) -> Self {
        Self { grid }
    }

    pub fn grid(&self) -> &GridDefinition {
        &self.grid
    }

    fn place(&self, slot: &ScheduleSlot, bucket_index: usize, lane: Lane) -> Placement {
        Placement {
            slot_id: slot.id.clone(),
            subject: slot.subject.clone(),
            session_type: slot.session.as_str().to_string(),
            student_count: slot.session.student_count(),
            color: slot.color.clone(),
            start_time: slot.start_time.to_string(),
            end_time: slot.end_time.to_string(),
            height: self.grid.slot_height(slot),
            top: self.grid.slot_offset(slot, bucket_index),
            lane: lane.lane,
            lanes: lane.lanes,
        }
    }

    pub fn layout(&self, slots: &[ScheduleSlot]) -> ScheduleGrid {
        let lanes = assign_lanes(slots);

        let rows = self
            .grid
            .buckets()
            .map(|(bucket_index, bucket)| GridRow {
                bucket_index,
                time: bucket.to_string(),
                cells: DayOfWeek::ALL
                    .into_iter()
                    .map(|day| {
                        let mut placements: Vec<Placement> = slots_in_cell(slots, day, bucket)
                            .map(|(i, slot)| self.place(slot, bucket_index, lanes[i]))
                            .collect();
                        placements.sort_by_key(|p| p.lane);
                        GridCell { day, placements }
                    })
                    .collect(),
            })
            .collect();

        ScheduleGrid {
            row_height: self.grid.row_height_px,
            days: DayOfWeek::ALL.to_vec(),
            rows,
        }
    }
}
