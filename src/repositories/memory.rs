//! Almacenamiento en memoria
//!
//! Implementa todos los repositorios sobre tablas en memoria protegidas por un
//! `RwLock`. Se usa con `STORAGE_BACKEND=memory` (demos, pruebas de la API) y
//! reproduce las restricciones de unicidad y de clave foránea del schema SQL.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use crate::models::guest::{Guest, NewGuest};
use crate::models::post::{LocalPost, NewPost, PostChanges};
use crate::models::reservation::{Reservation, ReservationDraft};
use crate::models::room::{NewRoom, Room};
use crate::models::user::{NewUser, User};
use crate::repositories::guest_repository::GuestRepository;
use crate::repositories::post_repository::PostRepository;
use crate::repositories::reservation_repository::ReservationRepository;
use crate::repositories::room_repository::RoomRepository;
use crate::repositories::user_repository::UserRepository;
use crate::utils::errors::{AppError, AppResult};

/// Post almacenado sin los datos del autor (se resuelven al leer)
#[derive(Debug, Clone)]
struct StoredPost {
    id: i32,
    title: String,
    body: String,
    user_id: i32,
    created_at: chrono::DateTime<Utc>,
    updated_at: chrono::DateTime<Utc>,
}

/// Secuencia tipo SERIAL
#[derive(Debug, Default)]
struct Sequence(i32);

impl Sequence {
    fn next(&mut self) -> i32 {
        self.0 += 1;
        self.0
    }
}

#[derive(Debug, Default)]
struct Tables {
    rooms: BTreeMap<i32, Room>,
    guests: BTreeMap<i32, Guest>,
    reservations: BTreeMap<i32, Reservation>,
    users: BTreeMap<i32, User>,
    posts: BTreeMap<i32, StoredPost>,
    room_seq: Sequence,
    guest_seq: Sequence,
    reservation_seq: Sequence,
    user_seq: Sequence,
    post_seq: Sequence,
}

impl Tables {
    fn with_author(&self, post: &StoredPost) -> LocalPost {
        let author = self.users.get(&post.user_id);
        LocalPost {
            id: post.id,
            title: post.title.clone(),
            body: post.body.clone(),
            user_id: post.user_id,
            created_at: post.created_at,
            updated_at: post.updated_at,
            author_username: author.map(|u| u.username.clone()),
            author_email: author.map(|u| u.email.clone()),
        }
    }

    fn ensure_user_exists(&self, user_id: i32, context: &str) -> AppResult<()> {
        if self.users.contains_key(&user_id) {
            Ok(())
        } else {
            Err(AppError::Conflict(format!("{}: el registro tiene referencias", context)))
        }
    }
}

fn duplicate(context: &str) -> AppError {
    AppError::Conflict(format!("{}: el valor ya existe", context))
}

fn missing(context: &str, id: i32) -> AppError {
    AppError::NotFound(format!("{}: no existe el id {}", context, id))
}

#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RoomRepository for MemoryStore {
    async fn list(&self) -> AppResult<Vec<Room>> {
        Ok(self.tables.read().await.rooms.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Room>> {
        Ok(self.tables.read().await.rooms.get(&id).cloned())
    }

    async fn find_by_number(&self, number: &str) -> AppResult<Option<Room>> {
        let tables = self.tables.read().await;
        Ok(tables.rooms.values().find(|r| r.number == number).cloned())
    }

    async fn create(&self, room: NewRoom) -> AppResult<Room> {
        let mut tables = self.tables.write().await;
        if tables.rooms.values().any(|r| r.number == room.number) {
            return Err(duplicate("Error creando habitación"));
        }
        let id = tables.room_seq.next();
        let room = room.into_room(id);
        tables.rooms.insert(id, room.clone());
        Ok(room)
    }

    async fn update(&self, room: Room) -> AppResult<Room> {
        let mut tables = self.tables.write().await;
        if !tables.rooms.contains_key(&room.id) {
            return Err(missing("Error actualizando habitación", room.id));
        }
        if tables.rooms.values().any(|r| r.id != room.id && r.number == room.number) {
            return Err(duplicate("Error actualizando habitación"));
        }
        tables.rooms.insert(room.id, room.clone());
        Ok(room)
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let mut tables = self.tables.write().await;
        if tables.reservations.values().any(|r| r.room_id == id) {
            return Err(AppError::Conflict(
                "Error eliminando habitación: el registro tiene referencias".to_string(),
            ));
        }
        tables.rooms.remove(&id);
        Ok(())
    }
}

#[async_trait]
impl GuestRepository for MemoryStore {
    async fn list(&self) -> AppResult<Vec<Guest>> {
        Ok(self.tables.read().await.guests.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Guest>> {
        Ok(self.tables.read().await.guests.get(&id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> AppResult<Option<Guest>> {
        let tables = self.tables.read().await;
        Ok(tables.guests.values().find(|g| g.name == name).cloned())
    }

    async fn find_by_document(&self, document: &str) -> AppResult<Option<Guest>> {
        let tables = self.tables.read().await;
        Ok(tables.guests.values().find(|g| g.document == document).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Guest>> {
        let tables = self.tables.read().await;
        Ok(tables.guests.values().find(|g| g.email == email).cloned())
    }

    async fn create(&self, guest: NewGuest) -> AppResult<Guest> {
        let mut tables = self.tables.write().await;
        let clash = tables.guests.values().any(|g| {
            g.name == guest.name || g.document == guest.document || g.email == guest.email
        });
        if clash {
            return Err(duplicate("Error creando huésped"));
        }
        let id = tables.guest_seq.next();
        let guest = guest.into_guest(id);
        tables.guests.insert(id, guest.clone());
        Ok(guest)
    }

    async fn update(&self, guest: Guest) -> AppResult<Guest> {
        let mut tables = self.tables.write().await;
        if !tables.guests.contains_key(&guest.id) {
            return Err(missing("Error actualizando huésped", guest.id));
        }
        let clash = tables.guests.values().any(|g| {
            g.id != guest.id
                && (g.name == guest.name || g.document == guest.document || g.email == guest.email)
        });
        if clash {
            return Err(duplicate("Error actualizando huésped"));
        }
        tables.guests.insert(guest.id, guest.clone());
        Ok(guest)
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let mut tables = self.tables.write().await;
        if tables.reservations.values().any(|r| r.guest_id == id) {
            return Err(AppError::Conflict(
                "Error eliminando huésped: el registro tiene referencias".to_string(),
            ));
        }
        tables.guests.remove(&id);
        Ok(())
    }
}

#[async_trait]
impl ReservationRepository for MemoryStore {
    async fn list(&self) -> AppResult<Vec<Reservation>> {
        Ok(self.tables.read().await.reservations.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Reservation>> {
        Ok(self.tables.read().await.reservations.get(&id).cloned())
    }

    async fn list_by_room(&self, room_id: i32, exclude_id: Option<i32>) -> AppResult<Vec<Reservation>> {
        let tables = self.tables.read().await;
        let mut reservations: Vec<Reservation> = tables
            .reservations
            .values()
            .filter(|r| r.room_id == room_id && Some(r.id) != exclude_id)
            .cloned()
            .collect();
        reservations.sort_by_key(|r| r.check_in);
        Ok(reservations)
    }

    async fn count_by_room(&self, room_id: i32) -> AppResult<i64> {
        let tables = self.tables.read().await;
        Ok(tables.reservations.values().filter(|r| r.room_id == room_id).count() as i64)
    }

    async fn count_by_guest(&self, guest_id: i32) -> AppResult<i64> {
        let tables = self.tables.read().await;
        Ok(tables.reservations.values().filter(|r| r.guest_id == guest_id).count() as i64)
    }

    async fn create(&self, draft: ReservationDraft) -> AppResult<Reservation> {
        let mut tables = self.tables.write().await;
        if !tables.rooms.contains_key(&draft.room_id) || !tables.guests.contains_key(&draft.guest_id) {
            return Err(AppError::Conflict(
                "Error creando reserva: el registro tiene referencias".to_string(),
            ));
        }
        let id = tables.reservation_seq.next();
        let reservation = draft.into_reservation(id);
        tables.reservations.insert(id, reservation.clone());
        Ok(reservation)
    }

    async fn update(&self, id: i32, draft: ReservationDraft) -> AppResult<Reservation> {
        let mut tables = self.tables.write().await;
        if !tables.reservations.contains_key(&id) {
            return Err(missing("Error actualizando reserva", id));
        }
        let reservation = draft.into_reservation(id);
        tables.reservations.insert(id, reservation.clone());
        Ok(reservation)
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        self.tables.write().await.reservations.remove(&id);
        Ok(())
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>> {
        Ok(self.tables.read().await.users.get(&id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let tables = self.tables.read().await;
        Ok(tables.users.values().find(|u| u.username == username).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let tables = self.tables.read().await;
        Ok(tables.users.values().find(|u| u.email == email).cloned())
    }

    async fn create(&self, user: NewUser) -> AppResult<User> {
        let mut tables = self.tables.write().await;
        if tables
            .users
            .values()
            .any(|u| u.username == user.username || u.email == user.email)
        {
            return Err(duplicate("Error creando usuario"));
        }
        let id = tables.user_seq.next();
        let user = User {
            id,
            username: user.username,
            email: user.email,
            password_hash: user.password_hash,
        };
        tables.users.insert(id, user.clone());
        Ok(user)
    }
}

#[async_trait]
impl PostRepository for MemoryStore {
    async fn list(&self, user_id: Option<i32>) -> AppResult<Vec<LocalPost>> {
        let tables = self.tables.read().await;
        Ok(tables
            .posts
            .values()
            .filter(|p| user_id.map_or(true, |id| p.user_id == id))
            .map(|p| tables.with_author(p))
            .collect())
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<LocalPost>> {
        let tables = self.tables.read().await;
        Ok(tables.posts.get(&id).map(|p| tables.with_author(p)))
    }

    async fn create(&self, post: NewPost) -> AppResult<LocalPost> {
        let mut tables = self.tables.write().await;
        tables.ensure_user_exists(post.user_id, "Error al crear post")?;
        let id = tables.post_seq.next();
        let now = Utc::now();
        let stored = StoredPost {
            id,
            title: post.title,
            body: post.body,
            user_id: post.user_id,
            created_at: now,
            updated_at: now,
        };
        let view = tables.with_author(&stored);
        tables.posts.insert(id, stored);
        Ok(view)
    }

    async fn update(&self, id: i32, changes: PostChanges) -> AppResult<Option<LocalPost>> {
        let mut tables = self.tables.write().await;
        if let Some(user_id) = changes.user_id {
            tables.ensure_user_exists(user_id, "Error al actualizar post")?;
        }
        let Some(stored) = tables.posts.get_mut(&id) else {
            return Ok(None);
        };
        if let Some(title) = changes.title {
            stored.title = title;
        }
        if let Some(body) = changes.body {
            stored.body = body;
        }
        if let Some(user_id) = changes.user_id {
            stored.user_id = user_id;
        }
        stored.updated_at = Utc::now();
        let stored = stored.clone();
        Ok(Some(tables.with_author(&stored)))
    }

    async fn delete(&self, id: i32) -> AppResult<bool> {
        Ok(self.tables.write().await.posts.remove(&id).is_some())
    }
}
