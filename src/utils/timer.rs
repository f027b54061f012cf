// ============================================================================
// TIMER - Programación de callbacks diferidos
// ============================================================================

use gloo_timers::callback::Timeout;

/// Programa una tarea para ejecutarse tras `delay_ms` en el mismo hilo.
/// Las tareas no se cancelan ni se esperan.
pub trait Scheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>);
}

/// Scheduler del navegador basado en `setTimeout`
#[derive(Debug, Default, Clone, Copy)]
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        // forget(): el timeout debe dispararse aunque nadie guarde el handle
        Timeout::new(delay_ms, task).forget();
    }
}
