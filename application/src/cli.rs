//! Execution of [`Command`]s, rendering their outcome as text.

use std::fmt::Write as _;

use common::Date;
use itertools::Itertools as _;
use service::{
    command::{Register, Reserve},
    domain::{
        filter, listing, reservation::Guests, user, Listing, Reservation,
    },
    query, Home, Query as _,
};
use tracing as log;

use crate::{
    args::{self, Command},
    define_error, AsError, Error, Service,
};

define_error! {
    enum ShowError {
        #[code = "LISTING_NOT_FOUND"]
        #[message = "Listing not found"]
        ListingNotFound,
    }
}

define_error! {
    enum FormError {
        #[code = "INVALID_NAME"]
        #[message = "Name must have from 2 to 50 characters"]
        InvalidName,

        #[code = "INVALID_EMAIL"]
        #[message = "Email address is malformed"]
        InvalidEmail,

        #[code = "INVALID_PHONE"]
        #[message = "Phone number must have from 10 to 15 digits"]
        InvalidPhone,

        #[code = "INVALID_PASSWORD"]
        #[message = "Password must have from 6 to 128 characters"]
        InvalidPassword,
    }
}

/// Executes the provided [`Command`] as of `today`.
///
/// # Errors
///
/// Errors if the [`Command`] fails.
pub fn execute(
    service: &Service,
    command: Command,
    today: Date,
) -> Result<String, Error> {
    match command {
        Command::Search(search) => Ok(self::search(service, search, today)),
        Command::Show { id } => show(service, id.into()),
        Command::Reserve(form) => reserve(service, form),
        Command::Filters => Ok(filters()),
        Command::Register(form) => register(service, form),
        Command::Login(form) => login(form),
    }
}

/// Replays the `search` inputs on a [`Home`] page and renders the requested
/// page of the results.
fn search(service: &Service, search: args::Search, today: Date) -> String {
    let args::Search {
        destination,
        min_price,
        max_price,
        features,
        no_popular,
        check_in,
        check_out,
        page,
    } = search;

    let mut home = Home::new(service.clone(), today);
    if let Some(text) = destination {
        home.set_destination(text);
    }
    if let Some(price) = min_price {
        home.set_min_price(price);
    }
    if let Some(price) = max_price {
        home.set_max_price(price);
    }
    for feature in features.into_iter().unique() {
        _ = home.toggle_filter(feature.into());
    }
    if no_popular {
        _ = home.toggle_filter(filter::Kind::Popular);
    }
    if let Some(date) = check_in {
        home.set_check_in(date.coerce());
    }
    if let Some(date) = check_out {
        home.set_check_out(date.coerce());
    }
    if !home.change_page(page) {
        log::warn!("ignoring non-existent page {page}");
    }

    let mut out = String::new();
    let stay = home.stay();
    _ = writeln!(
        out,
        "{} - {} | {} - {}",
        stay.check_in(),
        stay.check_out(),
        home.price().min(),
        home.price().max(),
    );
    if let Some(e) = home.date_error() {
        _ = writeln!(out, "{e}");
    }
    if home.found().is_empty() {
        _ = writeln!(out, "No se encontraron alojamientos");
        return out;
    }
    for l in home.page() {
        _ = writeln!(out, "{}", summary(l));
    }
    let pagination = home.pagination();
    _ = write!(
        out,
        "Página {} de {} ({} resultados)",
        pagination.current_page(),
        pagination.total_pages(),
        home.found().len(),
    );
    out
}

/// Renders the [`Listing`] with the provided ID.
fn show(service: &Service, id: listing::Id) -> Result<String, Error> {
    let listing = service
        .execute(query::listing::ById::by(id))
        .unwrap_or_else(|e| match e {})
        .ok_or(ShowError::ListingNotFound)?;

    let listing::Capacity {
        guests,
        bedrooms,
        beds,
        bathrooms,
    } = listing.capacity;

    let mut out = summary(&listing);
    _ = write!(
        out,
        "\n{}\n{guests} huésped(es), {bedrooms} habitación(es), \
         {beds} cama(s), {bathrooms} baño(s)\n{}\n{}\n{}",
        listing.location,
        listing.description,
        listing.image,
        if listing.available {
            "Disponible"
        } else {
            "No disponible"
        },
    );
    for r in &listing.reviews {
        _ = write!(out, "\n{} ({}): {}", r.author, r.date, r.comment);
    }
    Ok(out)
}

/// Quotes a reservation out of the provided `form`.
fn reserve(service: &Service, form: args::Reserve) -> Result<String, Error> {
    let args::Reserve {
        id,
        check_in,
        check_out,
        guests,
    } = form;

    let Reservation {
        listing_id,
        stay,
        guests,
        quote,
    } = service
        .execute(Reserve {
            listing_id: id.into(),
            check_in: Some(check_in.coerce()),
            check_out: Some(check_out.coerce()),
            guests: Guests::new(guests),
        })
        .map_err(AsError::into_error)?;

    Ok(format!(
        "Reserva #{listing_id}: {} - {}, {guests} huésped(es)\n\
         {} noche(s) x {} = {}\n\
         Tarifa de servicio: {}\n\
         Total: {}",
        stay.check_in(),
        stay.check_out(),
        quote.nights,
        quote.price,
        quote.subtotal,
        quote.service_fee,
        quote.total,
    ))
}

/// Registers a new guest out of the provided `form`.
fn register(service: &Service, form: args::Register) -> Result<String, Error> {
    let args::Register {
        name,
        email,
        phone,
        birth_date,
        password,
    } = form;

    let user = service
        .execute(Register {
            name: user::Name::new(name).ok_or(FormError::InvalidName)?,
            email: user::Email::new(email).ok_or(FormError::InvalidEmail)?,
            phone: user::Phone::new(phone).ok_or(FormError::InvalidPhone)?,
            birth_date: birth_date.coerce(),
            password: user::Password::new(password)
                .ok_or(FormError::InvalidPassword)?,
        })
        .map_err(AsError::into_error)?;

    Ok(format!("Registro exitoso: {} <{}>", user.name, user.email))
}

/// Checks the credentials of the provided `form`.
fn login(form: args::Login) -> Result<String, Error> {
    let args::Login { email, password } = form;

    let email = user::Email::new(email).ok_or(FormError::InvalidEmail)?;
    _ = user::Password::new(password).ok_or(FormError::InvalidPassword)?;

    log::info!(email = %email, "credentials accepted");

    Ok(format!("Inicio de sesión exitoso: {email}"))
}

/// Renders the default [`filter::Filters`] registry.
fn filters() -> String {
    filter::Filters::default()
        .iter()
        .map(|f| {
            format!(
                "[{}] {} ({}, {})",
                if f.active { "x" } else { " " },
                f.name,
                f.kind,
                f.icon,
            )
        })
        .join("\n")
}

/// Renders a single-line summary of the provided [`Listing`].
fn summary(listing: &Listing) -> String {
    format!(
        "#{} {} | {}/noche | {} | {}",
        listing.id,
        listing.title,
        listing.price,
        listing.rating,
        listing.features.iter().join(", "),
    )
}
