pub(crate) const MENU: &[u8] = include_bytes!("../../assets/svg/menu.svg");
pub(crate) const CHEVRON_LEFT: &[u8] =
    include_bytes!("../../assets/svg/chevron-left.svg");
pub(crate) const SERVICE_REQUESTS: &[u8] =
    include_bytes!("../../assets/svg/service-requests.svg");
pub(crate) const PHONE_CONSULTATIONS: &[u8] =
    include_bytes!("../../assets/svg/phone.svg");
pub(crate) const REGISTRATION_REQUESTS: &[u8] =
    include_bytes!("../../assets/svg/registration.svg");
pub(crate) const CUSTOMERS: &[u8] =
    include_bytes!("../../assets/svg/customers.svg");
pub(crate) const COMPANIES: &[u8] =
    include_bytes!("../../assets/svg/companies.svg");
pub(crate) const EMPLOYEES: &[u8] =
    include_bytes!("../../assets/svg/employees.svg");
