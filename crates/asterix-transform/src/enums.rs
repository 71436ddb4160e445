use serde::Serialize;

use crate::error::TransformError;

// ── Macro for coded-value enums ───────────────────────────────────────
//
// Each enum here names the values of a small bit field inside an item.
// The macro generates the code ↔ variant pair; unknown codes become
// `TransformError::InvalidEnumValue`.

macro_rules! coded_enum {
  (
    $(#[$meta:meta])*
    pub enum $name:ident {
      $( $(#[$vmeta:meta])* $variant:ident = $code:literal ),+ $(,)?
    }
  ) => {
    $(#[$meta])*
    pub enum $name {
      $( $(#[$vmeta])* $variant ),+
    }

    impl $name {
      /// The raw code of this variant.
      #[must_use]
      pub fn code(self) -> u8 {
        match self {
          $( Self::$variant => $code ),+
        }
      }

      /// Map a raw code to its variant.
      ///
      /// # Errors
      ///
      /// [`TransformError::InvalidEnumValue`] if the code is undefined.
      pub fn from_code(value: u8) -> Result<Self, TransformError> {
        match value {
          $( $code => Ok(Self::$variant), )+
          other => Err(TransformError::InvalidEnumValue {
            enum_name: stringify!($name),
            value: other,
          }),
        }
      }
    }
  };
}

// ── ServerRole ────────────────────────────────────────────────────────

coded_enum! {
  /// SPE `NS` bits: which STR server sent the message.
  ///
  /// ```text
  /// ┌──────┬───────────┐
  /// │ Code │ Role      │
  /// ├──────┼───────────┤
  /// │ 0    │ principal │
  /// │ 1    │ secours   │
  /// │ 2    │ test      │
  /// └──────┴───────────┘
  /// ```
  #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
  #[serde(rename_all = "snake_case")]
  pub enum ServerRole {
    Principal = 0,
    Secours = 1,
    Test = 2,
  }
}

// ── StationMode ───────────────────────────────────────────────────────

coded_enum! {
  /// SPE secondary `ST` bit.
  #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
  #[serde(rename_all = "snake_case")]
  pub enum StationMode {
    Operational = 0,
    Evaluation = 1,
  }
}

// ── StpvLink ──────────────────────────────────────────────────────────

coded_enum! {
  /// SPE secondary `PS` bit: whether the STPV is connected to the STR.
  #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
  #[serde(rename_all = "snake_case")]
  pub enum StpvLink {
    StpvConnecteStr = 0,
    StpvDeconnecteStr = 1,
  }
}

// ── CardOrder ─────────────────────────────────────────────────────────

coded_enum! {
  /// CART `ORD` bits (top three bits of the ninth byte).
  #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
  #[serde(rename_all = "snake_case")]
  pub enum CardOrder {
    ActivationCarte = 0,
    AnnulationCarte = 1,
  }
}

// ── MessageType ───────────────────────────────────────────────────────

coded_enum! {
  /// I034/000 message type.
  ///
  /// ```text
  /// ┌──────┬─────────────────────────┐
  /// │ Code │ Message                 │
  /// ├──────┼─────────────────────────┤
  /// │ 1    │ north marker            │
  /// │ 2    │ sector crossing         │
  /// │ 3    │ geographical filtering  │
  /// │ 4    │ jamming strobe          │
  /// │ 5    │ solar storm             │
  /// │ 6    │ SSR jamming strobe      │
  /// │ 7    │ Mode S jamming strobe   │
  /// └──────┴─────────────────────────┘
  /// ```
  #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
  #[serde(rename_all = "snake_case")]
  pub enum MessageType {
    NorthMarker = 1,
    SectorCrossing = 2,
    GeographicalFiltering = 3,
    JammingStrobe = 4,
    SolarStorm = 5,
    SsrJammingStrobe = 6,
    ModeSJammingStrobe = 7,
  }
}

// ── DetectionType ───────────────────────────────────────────────────

coded_enum! {
  /// I048/020 `TYP` bits: how the target was detected.
  ///
  /// ```text
  /// ┌──────┬──────────────────────────────┐
  /// │ Code │ Detection                    │
  /// ├──────┼──────────────────────────────┤
  /// │ 0    │ no detection                 │
  /// │ 1    │ single PSR                   │
  /// │ 2    │ single SSR                   │
  /// │ 3    │ SSR + PSR                    │
  /// │ 4    │ single Mode S all-call       │
  /// │ 5    │ single Mode S roll-call      │
  /// │ 6    │ Mode S all-call + PSR        │
  /// │ 7    │ Mode S roll-call + PSR       │
  /// └──────┴──────────────────────────────┘
  /// ```
  #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
  #[serde(rename_all = "snake_case")]
  pub enum DetectionType {
    NoDetection = 0,
    SinglePsr = 1,
    SingleSsr = 2,
    SsrPsr = 3,
    ModeSAllCall = 4,
    ModeSRollCall = 5,
    ModeSAllCallPsr = 6,
    ModeSRollCallPsr = 7,
  }
}
