fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Generate gRPC server stubs for the sso.Auth service
    tonic_build::configure()
        .build_server(true)
        .build_client(false)
        .compile(&["../proto/sso.proto"], &["../proto"])?;

    Ok(())
}
