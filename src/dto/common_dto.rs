use serde::Serialize;

// Respuesta de los borrados
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
}

impl DeleteResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}
