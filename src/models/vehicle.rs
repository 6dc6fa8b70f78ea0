use serde::Serialize;

pub const OTHER_VEHICLE_ID: &str = "other";

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Vehicle {
    pub id: &'static str,
    pub name: &'static str,
}

pub static SAVED_VEHICLES: [Vehicle; 2] = [
    Vehicle {
        id: "v1",
        name: "Honda City (KA-01-AB-1234)",
    },
    Vehicle {
        id: "v2",
        name: "Hyundai i20 (KA-01-CD-5678)",
    },
];

pub fn saved_vehicle(id: &str) -> Option<&'static Vehicle> {
    SAVED_VEHICLES.iter().find(|vehicle| vehicle.id == id)
}
