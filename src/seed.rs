//! Demonstration employees registered when a session starts.

use crate::domain::{Address, Employee, Person, Rut};

/// The three sample employees shipped with the program.
pub fn demo_employees() -> Vec<Employee> {
    vec![
        Employee::new(
            Person::new(
                "KAKAROTO",
                "ROJAS",
                Rut::new("12345678-9"),
                Address::new("Av. Los Pinos 123", "Paine", "Santiago"),
                "KAKAROTOWINS@gmail.com",
            ),
            "PELEADOR",
            750000.0,
        ),
        Employee::new(
            Person::new(
                "MARIO",
                "CHAMPIÑON",
                Rut::new("87654321-K"),
                Address::new("Calle El Roble 456", "Puente Alto", "Santiago"),
                "MARIOSALTA@gmail.com",
            ),
            "FONTANERO",
            950000.0,
        ),
        Employee::new(
            Person::new(
                "KAIMAN",
                "MAGIC",
                Rut::new("11223344-5"),
                Address::new("Camino Real 789", "La Florida", "Santiago"),
                "VIVAHOLE@gmail.com",
            ),
            "ASESINO",
            1200000.0,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validator::Validate;

    #[test]
    fn test_demo_employees_are_valid() {
        let employees = demo_employees();
        assert_eq!(employees.len(), 3);
        for employee in &employees {
            assert!(employee.is_valid(), "{:?}", employee.violations());
        }
    }
}
