//! Certificate Transparency log dataset
//!
//! Static mapping from the 32-byte log id (lower-case hex) to the log
//! description, covering the well-known public logs. The dataset is an
//! injected read-only table; an id that is not listed resolves to an empty
//! name.

use lazy_static::lazy_static;
use std::collections::HashMap;

lazy_static! {
    static ref CT_LOGS: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        m.insert(
            "68f698f81f6482be3a8ceeb9281d4cfc71515d6793d444d10a67acbb4f4ffbc4",
            "Google 'Aviator' log",
        );
        m.insert(
            "29012997a56a1b841dfc8f4baa97b6bf77ca4c5f9fe0de5cba9f30bc6a444dbb",
            "Google 'Argon2017' log",
        );
        m.insert(
            "a4501969d9d4b2562b6e7dcdbd9d70939d7e25b2b2b1cfce50f5ac7caaa7a6a4",
            "Google 'Argon2018' log",
        );
        m.insert(
            "6353cd10d0b74d6c71f4c71a0b0dca1f3ee77a71b14d3d8f0e55d5d9f8e4f4ba",
            "Google 'Argon2019' log",
        );
        m.insert(
            "b21e05cc8ba2cd8a204e8766f92bb98a2520676bdafa70e7b249532def8b905e",
            "Google 'Argon2020' log",
        );
        m.insert(
            "f65c942fd1773022145418083094568ee34d131933bfdf0c2f200bcc4ef164e3",
            "Google 'Argon2021' log",
        );
        m.insert(
            "2979bef09e393921f056739f63a577e5be577d9c600af8f94d5d265c255dc784",
            "Google 'Argon2022' log",
        );
        m.insert(
            "e83ed0da3ef5063532e75728bc896bc903d3cbd1116beceb69e1777d6d06bd6e",
            "Google 'Argon2023' log",
        );
        m.insert(
            "084114980071532c16195efbd1b95e8cbeb8e89c77b0e4f7c1eb8d31b1a24b04",
            "Google 'Xenon2019' log",
        );
        m.insert(
            "07b75c1be57d68fff1b0c61d2315c7bae6577c5794b76aeebc613a1a69d3a21c",
            "Google 'Xenon2020' log",
        );
        m.insert(
            "7d3ef2f88fff88556824c2c0ca9e5289792bc50e78097f2e6a9768997e22f0d7",
            "Google 'Xenon2021' log",
        );
        m.insert(
            "46a555eb75fa912030b5a28969f4f37d112c4174befd49b885abf2fc70fe6d47",
            "Google 'Xenon2022' log",
        );
        m.insert(
            "a4b90990b418581487bb13a2cc67700a3c359804f91bdfb8e377cd0ec80ddc10",
            "Google 'Pilot' log",
        );
        m.insert(
            "ee4bbdb775ce60bae142691fabe19e66a30f7e5fb072d88300c47b897aa8fdcb",
            "Google 'Rocketeer' log",
        );
        m.insert(
            "bbd9dfbc1f8a71b593942397aa927b473857950aab52e81a909664368e1ed185",
            "Google 'Skydiver' log",
        );
        m.insert(
            "293c519654c83965baaa50fc5807d4b76fbf587a2972dca4c30cf4e54547f478",
            "Google 'Icarus' log",
        );
        m.insert(
            "1fbcb2cf5fcaa8c94bfa08e5e1843ac4b2a5d3bd3b0cdd056dc37bbbc6cf3456",
            "Cloudflare 'Nimbus2018' log",
        );
        m.insert(
            "747eda8331ad331091219cce254f4270c2bffd5e422008c6373579e6107bcc56",
            "Cloudflare 'Nimbus2019' log",
        );
        m.insert(
            "5ea773f9df56c0e7b536487dd049e0327a919a0c84a112128418759681714558",
            "Cloudflare 'Nimbus2020' log",
        );
        m.insert(
            "4494652eb0eeceafc44007d8a8fe28c0dae682bed8cb31b53fd33396b5b681a8",
            "Cloudflare 'Nimbus2021' log",
        );
        m.insert(
            "41c8cab1df22464a10c6a13a0942875e4e318b1b03ebeb4bc768f090629606f6",
            "Cloudflare 'Nimbus2022' log",
        );
        m.insert(
            "5614069a2fd7c2ecd3f5e1bd44b23ec74676b9bc99115cc0ef949855d689d0dd",
            "DigiCert Log Server",
        );
        m.insert(
            "8775bfe7597cf88c43995fbdf36eff568d475636ff4ab560c1b4eaff5ea0830f",
            "DigiCert Log Server 2",
        );
        m.insert(
            "c1164ae0a772d2d4392dc80ac10770d4f0c49bde991a4840c1fa075164f63360",
            "DigiCert Yeti2019 Log",
        );
        m.insert(
            "f095a459f200d18240102d2f93888ead4bfe1d47e399e1d034a6b0a8aa8eb273",
            "DigiCert Yeti2020 Log",
        );
        m.insert(
            "5cdc4392fee6ab4544b15e9ad456e61037fbd5fa47dca17394b25ee6f6c70eca",
            "DigiCert Yeti2021 Log",
        );
        m.insert(
            "2245450759552456963fa12ff1f76d86e0232663adc04b7f5dc6835c6ee20f02",
            "DigiCert Yeti2022 Log",
        );
        m.insert(
            "5581d4c2169036014aea0b9b573c53f0c0e43878702508172fa3aa1d0713d30c",
            "Sectigo 'Sabre' CT log",
        );
        m.insert(
            "6f5376ac31f03119d89900a45115ff77151c11d902c10029068db2089a37d913",
            "Sectigo 'Mammoth' CT log",
        );
        m.insert(
            "e712f2b0377e1a62fb8ec90c6184f1ea7b37cb561d11265bf3e0f34bf241546e",
            "Let's Encrypt 'Oak2020' log",
        );
        m.insert(
            "9420bc1e8ed58d6c88731f828b222c0dd1da4d5e6c4f943d61db4e2f584da2c2",
            "Let's Encrypt 'Oak2021' log",
        );
        m.insert(
            "dfa55eab68824f1f6cadeeb85f4e3e5aeacda212a46a5e8e3b12c020445c2a73",
            "Let's Encrypt 'Oak2022' log",
        );
        m.insert(
            "34b1f1a5103b1fdb15271f1ff29eaa8147fbe6bdcab421a23a36512bf8c14c2b",
            "TrustAsia Log2021",
        );
        m
    };
}

/// Resolve a CT log id (lower-case hex) to its description.
///
/// Returns an empty string when the id is not in the dataset.
pub fn log_name(log_id_hex: &str) -> &'static str {
    CT_LOGS.get(log_id_hex).copied().unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_log() {
        assert_eq!(
            log_name("ee4bbdb775ce60bae142691fabe19e66a30f7e5fb072d88300c47b897aa8fdcb"),
            "Google 'Rocketeer' log"
        );
    }

    #[test]
    fn unknown_log_is_empty() {
        assert_eq!(log_name("00112233"), "");
    }
}
