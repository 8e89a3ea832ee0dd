//! Guardas de borrado
//!
//! Una habitación o un huésped solo se borran si ninguna reserva los
//! referencia; una reserva solo se borra cuando ya no está activa.

use crate::models::reservation::Reservation;
use crate::repositories::ReservationRepository;
use crate::utils::errors::{AppResult, RuleViolation};

pub const ROOM_HAS_RESERVATIONS: &str = "No se puede eliminar la habitación porque tiene reservas.";
pub const GUEST_HAS_RESERVATIONS: &str = "No se puede eliminar el huésped porque tiene reservas.";
pub const RESERVATION_STILL_ACTIVE: &str = "Solo se puede eliminar una reserva cancelada o finalizada.";

/// Cierto si ninguna reserva, en cualquier estado, apunta a la habitación
pub async fn can_delete_room(reservations: &dyn ReservationRepository, room_id: i32) -> AppResult<bool> {
    Ok(reservations.count_by_room(room_id).await? == 0)
}

/// Cierto si ninguna reserva, en cualquier estado, apunta al huésped
pub async fn can_delete_guest(reservations: &dyn ReservationRepository, guest_id: i32) -> AppResult<bool> {
    Ok(reservations.count_by_guest(guest_id).await? == 0)
}

pub fn can_delete_reservation(reservation: &Reservation) -> bool {
    reservation.status.is_terminal()
}

pub async fn ensure_room_deletable(reservations: &dyn ReservationRepository, room_id: i32) -> AppResult<()> {
    if can_delete_room(reservations, room_id).await? {
        Ok(())
    } else {
        Err(RuleViolation::Conflict(ROOM_HAS_RESERVATIONS.to_string()).into())
    }
}

pub async fn ensure_guest_deletable(reservations: &dyn ReservationRepository, guest_id: i32) -> AppResult<()> {
    if can_delete_guest(reservations, guest_id).await? {
        Ok(())
    } else {
        Err(RuleViolation::Conflict(GUEST_HAS_RESERVATIONS.to_string()).into())
    }
}

pub fn ensure_reservation_deletable(reservation: &Reservation) -> AppResult<()> {
    if can_delete_reservation(reservation) {
        Ok(())
    } else {
        Err(RuleViolation::Conflict(RESERVATION_STILL_ACTIVE.to_string()).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::guest::NewGuest;
    use crate::models::reservation::{ReservationDraft, ReservationStatus};
    use crate::models::room::{NewRoom, RoomStatus, RoomType};
    use crate::repositories::{GuestRepository, MemoryStore, RoomRepository};
    use crate::utils::errors::AppError;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    async fn store_with_reservation(status: ReservationStatus) -> (MemoryStore, Reservation) {
        let store = MemoryStore::new();
        let room = RoomRepository::create(
            &store,
            NewRoom {
                number: "201".to_string(),
                room_type: RoomType::Suite,
                capacity: 4,
                status: RoomStatus::Disponible,
            },
        )
        .await
        .unwrap();
        let guest = GuestRepository::create(
            &store,
            NewGuest {
                name: "Luis Gómez".to_string(),
                document: "D-77".to_string(),
                email: "luis@hotel.test".to_string(),
                phone: "555 9876".to_string(),
            },
        )
        .await
        .unwrap();
        let reservation = ReservationRepository::create(
            &store,
            ReservationDraft {
                room_id: room.id,
                guest_id: guest.id,
                check_in: NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
                check_out: NaiveDate::from_ymd_opt(2025, 7, 3).unwrap(),
                personas: 2,
                status,
                total: Decimal::from(100),
            },
        )
        .await
        .unwrap();
        (store, reservation)
    }

    #[tokio::test]
    async fn referenced_room_and_guest_are_protected() {
        // Incluso una reserva finalizada bloquea el borrado
        let (store, reservation) = store_with_reservation(ReservationStatus::Finalizada).await;

        assert!(!can_delete_room(&store, reservation.room_id).await.unwrap());
        assert!(!can_delete_guest(&store, reservation.guest_id).await.unwrap());

        let error = ensure_room_deletable(&store, reservation.room_id).await.unwrap_err();
        assert!(matches!(error, AppError::Rule(RuleViolation::Conflict(msg)) if msg == ROOM_HAS_RESERVATIONS));
        let error = ensure_guest_deletable(&store, reservation.guest_id).await.unwrap_err();
        assert!(matches!(error, AppError::Rule(RuleViolation::Conflict(msg)) if msg == GUEST_HAS_RESERVATIONS));
    }

    #[tokio::test]
    async fn unreferenced_ids_are_deletable() {
        let (store, _) = store_with_reservation(ReservationStatus::Pendiente).await;
        assert!(can_delete_room(&store, 999).await.unwrap());
        assert!(ensure_guest_deletable(&store, 999).await.is_ok());
    }

    #[tokio::test]
    async fn only_finished_reservations_are_deletable() {
        for (status, deletable) in [
            (ReservationStatus::Pendiente, false),
            (ReservationStatus::Confirmada, false),
            (ReservationStatus::Cancelada, true),
            (ReservationStatus::Finalizada, true),
        ] {
            let (_, reservation) = store_with_reservation(status).await;
            assert_eq!(can_delete_reservation(&reservation), deletable, "{:?}", status);
            assert_eq!(ensure_reservation_deletable(&reservation).is_ok(), deletable);
        }
    }
}
