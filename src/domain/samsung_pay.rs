/// Readiness reported by the Samsung Pay service on the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SamsungPayStatus {
    Ready,
    NotReady(NotReadyReason),
    NotSupported,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotReadyReason {
    /// The Samsung Pay app must be updated first.
    AppNeedsUpdate,
    /// The user has not finished setting up Samsung Pay.
    SetupNotCompleted,
    Other(i32),
}

/// Card networks known to both Braintree and Samsung Pay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SamsungPayCardBrand {
    Visa,
    Mastercard,
    AmericanExpress,
    Discover,
}

impl SamsungPayCardBrand {
    /// Maps a gateway brand name. Brands Samsung Pay cannot process yield `None`.
    pub fn from_gateway_name(name: &str) -> Option<Self> {
        match name {
            "visa" => Some(Self::Visa),
            "mastercard" => Some(Self::Mastercard),
            "american_express" => Some(Self::AmericanExpress),
            "discover" => Some(Self::Discover),
            _ => None,
        }
    }
}
