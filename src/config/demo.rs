use crate::core::session::BookingSession;
use crate::core::{Activity, Destination, Passenger, SignUpOrder, Tier, TravelPackage};

pub const DEMO_PACKAGE_NAME: &str = "Its Vacation Time";

/// The built-in package used when no package file is given: two
/// destinations with two activities each and three passengers, one per tier.
pub fn its_vacation_time(order: SignUpOrder) -> BookingSession {
    let mut package = TravelPackage::new(DEMO_PACKAGE_NAME, 50).with_sign_up_order(order);

    package.add_destination(
        Destination::new("Gokarna")
            .with_activity(Activity::new("Boating", "Enjoy the waves", 50.0, 20))
            .with_activity(Activity::new("Horse Ride", "Enjoy the ride", 40.0, 15)),
    );
    package.add_destination(
        Destination::new("Pondicherry")
            .with_activity(Activity::new("Hiking", "Discover scenic trails", 30.0, 25))
            .with_activity(Activity::new(
                "Beaches",
                "Enjoy the vibe and street food",
                60.0,
                10,
            )),
    );

    let mut session = BookingSession::new(package);
    let _ = session.enroll(Passenger::new("Sudheer", 501, Tier::Standard));
    let _ = session.enroll(Passenger::new("Vijaya Laxmi", 502, Tier::Gold));
    let _ = session.enroll(Passenger::new("Maggie", 503, Tier::Premium));
    session
}
