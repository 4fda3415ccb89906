use derive_new::new;

#[derive(Debug, new)]
pub struct CreateSpace {
    pub space_number: String,
}
