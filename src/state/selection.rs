// ============================================================================
// SELECTION - Máquina de estados de selección + visibilidad del panel
// ============================================================================
// Sin DOM ni timers: AppState programa los reveals y llama a `fire_reveal`.
// ============================================================================

use crate::config::RevealMode;
use crate::models::VehicleRecord;

/// Fase visible de la selección
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionPhase {
    NoSelection,
    Selected { panel_visible: bool },
}

/// Reveal programado para un evento de selección concreto
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealTicket {
    pub event_id: u64,
}

/// Resultado de `select`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectOutcome {
    /// La matrícula seleccionada cambió (dispara scroll y vuelo del mapa)
    pub changed: bool,
    pub ticket: RevealTicket,
}

/// Efecto de un reveal al dispararse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealEffect {
    Opened,
    Closed,
    /// Reveal obsoleto o sin selección: no hace nada
    Discarded,
}

#[derive(Debug, Clone)]
pub struct SelectionMachine {
    selected: Option<VehicleRecord>,
    panel_visible: bool,
    mode: RevealMode,
    latest_event: u64,
    /// Último evento anterior a un `clear`: sus reveals ya no aplican
    cleared_at: u64,
    pending_reveals: usize,
}

impl SelectionMachine {
    pub fn new(mode: RevealMode) -> Self {
        Self {
            selected: None,
            panel_visible: false,
            mode,
            latest_event: 0,
            cleared_at: 0,
            pending_reveals: 0,
        }
    }

    pub fn mode(&self) -> RevealMode {
        self.mode
    }

    pub fn selected(&self) -> Option<&VehicleRecord> {
        self.selected.as_ref()
    }

    pub fn selected_plate(&self) -> Option<&str> {
        self.selected.as_ref().map(|v| v.id())
    }

    pub fn is_panel_visible(&self) -> bool {
        self.panel_visible
    }

    /// Reveals programados que aún no se han disparado
    pub fn pending_reveals(&self) -> usize {
        self.pending_reveals
    }

    pub fn phase(&self) -> SelectionPhase {
        match self.selected {
            None => SelectionPhase::NoSelection,
            Some(_) => SelectionPhase::Selected {
                panel_visible: self.panel_visible,
            },
        }
    }

    /// Comparación por matrícula: dos registros con la misma matrícula
    /// son el mismo objetivo de selección.
    pub fn is_selected(&self, vehicle: &VehicleRecord) -> bool {
        self.selected_plate() == Some(vehicle.id())
    }

    /// Selecciona `vehicle` de inmediato y devuelve el ticket del reveal a programar.
    /// La visibilidad del panel no cambia aquí.
    pub fn select(&mut self, vehicle: VehicleRecord) -> SelectOutcome {
        let changed = self.selected_plate() != Some(vehicle.id());
        self.selected = Some(vehicle);
        self.latest_event += 1;
        self.pending_reveals += 1;
        SelectOutcome {
            changed,
            ticket: RevealTicket {
                event_id: self.latest_event,
            },
        }
    }

    /// Aplica un reveal cuando vence su retardo
    pub fn fire_reveal(&mut self, ticket: RevealTicket) -> RevealEffect {
        self.pending_reveals = self.pending_reveals.saturating_sub(1);
        if self.selected.is_none() || ticket.event_id <= self.cleared_at {
            return RevealEffect::Discarded;
        }
        match self.mode {
            RevealMode::Toggle => {
                self.panel_visible = !self.panel_visible;
                if self.panel_visible {
                    RevealEffect::Opened
                } else {
                    RevealEffect::Closed
                }
            }
            RevealMode::Latest => {
                if ticket.event_id != self.latest_event {
                    return RevealEffect::Discarded;
                }
                self.panel_visible = true;
                RevealEffect::Opened
            }
        }
    }

    /// Cierra el panel sin tocar la selección. Devuelve si estaba abierto.
    pub fn dismiss(&mut self) -> bool {
        std::mem::replace(&mut self.panel_visible, false)
    }

    /// Limpia la selección, cierra el panel e invalida los reveals pendientes
    pub fn clear(&mut self) -> bool {
        let had_selection = self.selected.take().is_some();
        self.panel_visible = false;
        self.cleared_at = self.latest_event;
        had_selection
    }
}
