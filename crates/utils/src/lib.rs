use rand::Rng;

/// Generates a random alphanumeric secret, used for session ids.
pub fn create_random_secret(secret_len: usize) -> String {
    let mut rng = rand::thread_rng();
    std::iter::repeat(())
        .map(|()| rng.sample(rand::distributions::Alphanumeric))
        .map(char::from)
        .take(secret_len)
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn creates_secret_of_expected_length() {
        for len in [1, 16, 64] {
            assert_eq!(create_random_secret(len).len(), len);
        }
    }
}
