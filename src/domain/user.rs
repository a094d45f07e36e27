// src/domain/user.rs
use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::{Uuid, uuid};

/// Role ids are fixed seed values shared with the upstream gateway; the
/// gateway sends them back verbatim in the `x-role-id` header.
pub const ROLE_ID_PIMPINAN_JAMAAH: Uuid = uuid!("26b2b64e-9ae3-4e2e-9d57-0f3e331cbd32");
pub const ROLE_ID_PIMPINAN_CABANG: Uuid = uuid!("3594bece-a684-4287-8391-3cd48412aaa9");
pub const ROLE_ID_BIDGAR_WAKAF: Uuid = uuid!("42143b9f-0d11-4a97-84eb-65d65e1f4bcc");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub Uuid);

impl UserId {
    pub fn new(id: Uuid) -> Self {
        Self(id)
    }

    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl From<UserId> for Uuid {
    fn from(value: UserId) -> Self {
        value.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    PimpinanJamaah,
    PimpinanCabang,
    BidgarWakaf,
}

impl Role {
    pub fn from_id(id: Uuid) -> DomainResult<Self> {
        if id == ROLE_ID_PIMPINAN_JAMAAH {
            Ok(Role::PimpinanJamaah)
        } else if id == ROLE_ID_PIMPINAN_CABANG {
            Ok(Role::PimpinanCabang)
        } else if id == ROLE_ID_BIDGAR_WAKAF {
            Ok(Role::BidgarWakaf)
        } else {
            Err(DomainError::Validation(format!("unknown role id '{id}'")))
        }
    }

    pub fn id(&self) -> Uuid {
        match self {
            Role::PimpinanJamaah => ROLE_ID_PIMPINAN_JAMAAH,
            Role::PimpinanCabang => ROLE_ID_PIMPINAN_CABANG,
            Role::BidgarWakaf => ROLE_ID_BIDGAR_WAKAF,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::PimpinanJamaah => "Pimpinan Jamaah",
            Role::PimpinanCabang => "Pimpinan Cabang",
            Role::BidgarWakaf => "Bidgar Wakaf",
        }
    }

    /// Tanah rows may be mutated without an approval round-trip by the
    /// branch leadership and by the waqf division itself.
    pub fn can_mutate_tanah_directly(&self) -> bool {
        matches!(self, Role::PimpinanCabang | Role::BidgarWakaf)
    }

    /// Sertifikat mutations are stricter: only Bidgar Wakaf writes directly.
    pub fn can_mutate_sertifikat_directly(&self) -> bool {
        matches!(self, Role::BidgarWakaf)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
