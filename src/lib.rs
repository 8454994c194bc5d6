// ============================================================================
// IMAGE UPLOADER - FRONTEND YEW (RUST PURO)
// ============================================================================
// - Components: render con html! (sin lógica)
// - Hooks: conectan store + ViewModel
// - ViewModels: lógica de subida/listado, emiten acciones
// - Stores: estado inmutable + reducer
// - Views: proyección pura del estado para render
// - Services: SOLO comunicación API + recursos del navegador
// - Models: estructuras compartidas con backend
// ============================================================================

pub mod components;
pub mod config;
pub mod hooks;
pub mod models;
pub mod services;
pub mod stores;
pub mod utils;
pub mod viewmodels;
pub mod views;
