use actix::prelude::*;
use colored::Color;
use common::capabilities::{
    ConsoleSpeaker, FixedLocation, LocationProvider, NoLocation, NoopSpeaker, Speaker,
};
use common::config::TrackerConfig;
use common::constants::CONFIG_FILE_VAR;
use common::errors::ConfigError;
use common::logger::Logger;
use common::types::agent::random_agent;
use common::types::booking::{BookingDetails, BookingKind, PackageType, VehicleType};
use common::types::location::{Location, RecentLocations};
use std::env;
use tokio::signal::ctrl_c;
use tokio::sync::oneshot;
use tracking::console::StdinListener;
use tracking::messages::{GetSnapshot, StartListening, StopTracking, Subscribe};
use tracking::tracking_actors::announcer::Announcer;
use tracking::tracking_actors::tracker::Tracker;
use tracking::tracking_actors::tracking_view::TrackingView;
use tracking::tracking_actors::voice_control::{Service, VoiceCommand, VoiceControl};

/// Config file named by `TRACKING_CONFIG`, if any, then environment overrides.
fn load_config() -> Result<TrackerConfig, ConfigError> {
    match env::var(CONFIG_FILE_VAR) {
        Ok(path) => TrackerConfig::from_json_file(path)?.overridden_by(|key| env::var(key).ok()),
        Err(_) => TrackerConfig::from_env(),
    }
}

fn default_details(kind: BookingKind, fare: Option<f64>) -> BookingDetails {
    match kind {
        BookingKind::Ride => {
            let vehicle = VehicleType::Car;
            BookingDetails::ride(fare.unwrap_or(vehicle.suggested_fare())).with_vehicle(vehicle)
        }
        BookingKind::Delivery => BookingDetails::delivery(fare.unwrap_or(kind.minimum_fare()))
            .with_package(PackageType::Package),
    }
}

/// Stand-in for the platform's positioning service.
fn location_provider(config: &TrackerConfig) -> Box<dyn LocationProvider> {
    if config.location_enabled {
        Box::new(FixedLocation(Location::new(
            "Current Location",
            40.758,
            -73.9855,
        )))
    } else {
        Box::new(NoLocation)
    }
}

/// Lets the user pick the service out loud, as the home screen does.
async fn ask_by_voice(announcer: Addr<Announcer>, logger: &Logger) -> Option<BookingKind> {
    let voice = VoiceControl::new(Box::new(StdinListener), announcer).start();
    loop {
        match voice.send(StartListening).await {
            Ok(Some(VoiceCommand::SelectService(Service::Ride))) => return Some(BookingKind::Ride),
            Ok(Some(VoiceCommand::SelectService(Service::Delivery))) => {
                return Some(BookingKind::Delivery);
            }
            Ok(Some(VoiceCommand::SelectService(Service::Shops))) => {
                logger.warn("Shop orders are not tracked here, say ride or delivery");
            }
            Ok(Some(VoiceCommand::Unrecognized)) => {}
            Ok(Some(VoiceCommand::NavigateHome)) | Ok(None) => return None,
            Err(e) => {
                logger.error(format!("Voice control unreachable: {}", e));
                return None;
            }
        }
    }
}

#[actix::main]
async fn main() -> std::io::Result<()> {
    let logger = Logger::new("Main", Color::Green);
    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            logger.error(format!("Configuration error: {}", e));
            std::process::exit(1);
        }
    };

    let speaker: Box<dyn Speaker> = if config.voice_enabled {
        Box::new(ConsoleSpeaker::new())
    } else {
        Box::new(NoopSpeaker)
    };
    let announcer = Announcer::new(speaker, config.voice_enabled, config.locale).start();

    let args: Vec<String> = env::args().collect();
    let kind = match args.get(1) {
        Some(raw) => match raw.parse::<BookingKind>() {
            Ok(kind) => kind,
            Err(e) => {
                logger.error(e.to_string());
                std::process::exit(1);
            }
        },
        None if config.voice_enabled => match ask_by_voice(announcer.clone(), &logger).await {
            Some(kind) => kind,
            None => {
                logger.info("No service selected, bye");
                return Ok(());
            }
        },
        None => {
            let program = args.first().map(String::as_str).unwrap_or("tracking");
            eprintln!("Usage: {} <ride|delivery> [fare]", program);
            std::process::exit(1);
        }
    };
    let fare = match args.get(2).map(|raw| raw.parse::<f64>()) {
        Some(Ok(fare)) => Some(fare),
        Some(Err(e)) => {
            logger.error(format!("Invalid fare: {}", e));
            std::process::exit(1);
        }
        None => None,
    };
    let details = default_details(kind, fare);

    let mut recents = RecentLocations::seeded();
    let location = location_provider(&config);
    if !config.location_enabled {
        logger.warn("Location disabled, using the saved pickup");
    }
    match recents.pickup_from(&*location) {
        Some(pickup) => logger.info(format!(
            "Pickup at {} ({:.4}, {:.4})",
            pickup.address, pickup.lat, pickup.lng
        )),
        None => logger.warn("No pickup place known"),
    }
    logger.info(format!("{} recent places saved", recents.len()));

    let tracker = match Tracker::new(details, random_agent(), config, announcer) {
        Ok(tracker) => tracker,
        Err(e) => {
            logger.error(format!("Cannot start tracking: {}", e));
            std::process::exit(1);
        }
    };
    let agent = tracker.booking.agent().clone();
    logger.info(format!(
        "Rider {} ({}★, {})",
        agent.name, agent.rating, agent.vehicle_number
    ));

    let tracker_addr = tracker.start();
    let (delivered_tx, delivered_rx) = oneshot::channel();
    let view = TrackingView::new(kind, delivered_tx).start();
    tracker_addr.do_send(Subscribe {
        recipient: view.recipient(),
    });

    let snapshot = tokio::select! {
        _ = ctrl_c() => {
            logger.info("Ctrl-C received, leaving the tracking view...");
            tracker_addr.send(StopTracking).await
        }
        _ = delivered_rx => tracker_addr.send(GetSnapshot).await,
    };

    match snapshot {
        Ok(snapshot) => match serde_json::to_string_pretty(&snapshot) {
            Ok(json) => println!("{}", json),
            Err(e) => logger.error(format!("Unable to render the final snapshot: {}", e)),
        },
        Err(e) => logger.error(format!("Tracker unreachable: {}", e)),
    }

    System::current().stop();
    Ok(())
}
