use gattscan::{
    show_services, Characteristic, CharacteristicProperties as Props, GattError, InspectConfig,
    Peripheral, Service, StdoutSession,
};
use std::collections::HashMap;

/// A canned peripheral standing in for a real connection
struct DemoPeripheral {
    characteristics: HashMap<u16, Vec<Characteristic>>,
    values: HashMap<u16, Vec<u8>>,
}

impl Peripheral for DemoPeripheral {
    fn discover_characteristics(
        &mut self,
        service: &Service,
    ) -> Result<Vec<Characteristic>, GattError> {
        self.characteristics
            .get(&service.start_handle)
            .cloned()
            .ok_or(GattError::Att("Attribute not found".into()))
    }

    fn read_characteristic(&mut self, ch: &Characteristic) -> Result<Vec<u8>, GattError> {
        self.values
            .get(&ch.handle)
            .cloned()
            .ok_or(GattError::Att("Read not permitted".into()))
    }

    fn write_characteristic(
        &mut self,
        ch: &Characteristic,
        data: &[u8],
        _no_response: bool,
    ) -> Result<(), GattError> {
        self.values.insert(ch.handle, data.to_vec());
        Ok(())
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Usage: inspect_demo [WRITE_UUID WRITE_HEX]
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = InspectConfig::from_params(
        args.first().map(String::as_str),
        args.get(1).map(String::as_str),
    )?;

    let services = vec![
        Service::new(0x1800u16, 0x0001, 0x0007),
        Service::new(0x180Fu16, 0x0008, 0x000b),
        Service::new("6e40fff0-b5a3-f393-e0a9-e50e24dcca9e".parse::<gattscan::Uuid>()?, 0x000c, 0x0011)
            .with_name("Nordic UART"),
    ];

    let mut characteristics = HashMap::new();
    characteristics.insert(
        0x0001,
        vec![
            Characteristic::new(0x2A00u16, 0x0002, Props::READ | Props::WRITE),
            Characteristic::new(0x2A01u16, 0x0004, Props::READ),
            Characteristic::new(0x2A04u16, 0x0006, Props::READ),
        ],
    );
    characteristics.insert(
        0x0008,
        vec![Characteristic::new(0x2A19u16, 0x0009, Props::READ | Props::NOTIFY)],
    );
    characteristics.insert(
        0x000c,
        vec![
            Characteristic::new(
                "6e400002-b5a3-f393-e0a9-e50e24dcca9e".parse::<gattscan::Uuid>()?,
                0x000d,
                Props::WRITE | Props::WRITE_WITHOUT_RESPONSE,
            ),
            Characteristic::new(
                "6e400003-b5a3-f393-e0a9-e50e24dcca9e".parse::<gattscan::Uuid>()?,
                0x000f,
                Props::NOTIFY,
            ),
        ],
    );

    let mut values = HashMap::new();
    values.insert(0x0002, b"R02_1A2B\0".to_vec());
    values.insert(0x0004, vec![0xC1, 0x00]);
    values.insert(0x0009, vec![0x57]);

    let mut peripheral = DemoPeripheral {
        characteristics,
        values,
    };
    let mut session = StdoutSession::new(true);

    show_services(&mut peripheral, &mut session, &services, &config)?;
    Ok(())
}
