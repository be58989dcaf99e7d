//! Domain models shared by the billing and availability cores.

pub mod invoice;
pub mod lenient;
pub mod reservation;
pub mod resource;
pub mod service;

pub use invoice::{CreatedInvoice, DiscountKind, InvoiceStatus, NewInvoice, ReservationSnapshot};
pub use reservation::{NewReservation, Reservation, ReservationStatus, ResourceKind};
pub use resource::{AvailabilityState, Hall, Resource, Room, Table};
pub use service::{ExtraServiceLine, NewServiceLine};
