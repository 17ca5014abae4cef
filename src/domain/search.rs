// src/domain/search.rs
//
// Plate lookup for the "Veículos Liberados" page. This runs over a static
// in-memory list of released vehicles, not the live yard sheet.

/// A released vehicle as shown by the lookup page.
#[derive(Debug, Clone, Copy)]
pub struct ReleasedVehicle {
    pub plate: &'static str,
    pub model: &'static str,
    pub year: u16,
    pub color: &'static str,
    pub owner: &'static str,
    pub status: &'static str,
    pub location: &'static str,
    pub entry_date: &'static str,
    pub last_update: &'static str,
}

pub const RELEASED_VEHICLES: [ReleasedVehicle; 3] = [
    ReleasedVehicle {
        plate: "ABC-1234",
        model: "Mercedes-Benz Sprinter",
        year: 2023,
        color: "Branco",
        owner: "João Silva",
        status: "No pátio",
        location: "Setor A - Vaga 15",
        entry_date: "2024-01-10T14:30:00",
        last_update: "2024-01-15T10:30:00",
    },
    ReleasedVehicle {
        plate: "DEF-5678",
        model: "Volkswagen Delivery",
        year: 2022,
        color: "Azul",
        owner: "Maria Santos",
        status: "Em manutenção",
        location: "Oficina - Box 2",
        entry_date: "2024-01-12T09:15:00",
        last_update: "2024-01-15T09:15:00",
    },
    ReleasedVehicle {
        plate: "GHI-9012",
        model: "Ford Transit",
        year: 2023,
        color: "Prata",
        owner: "Carlos Oliveira",
        status: "Reservado",
        location: "Setor B - Vaga 8",
        entry_date: "2024-01-14T16:20:00",
        last_update: "2024-01-15T11:45:00",
    },
];

/// Case-insensitive substring match on the plate; first hit wins.
pub fn find_by_plate(term: &str) -> Option<&'static ReleasedVehicle> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }
    RELEASED_VEHICLES
        .iter()
        .find(|v| v.plate.to_lowercase().contains(&needle))
}
