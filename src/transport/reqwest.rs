use crate::{client::Error, transport::HttpClient};

impl HttpClient for reqwest::Client {
	async fn send(
		&self,
		request: http::Request<Vec<u8>>,
	) -> Result<http::Response<Vec<u8>>, Error> {
		log::debug!("HTTP request to: {}", request.uri());
		log::trace!("HTTP request: {request:?}");

		let response = self
			.execute(request.try_into().map_err(Error::request)?)
			.await
			.map_err(Error::request)?;

		let mut builder = http::Response::builder().status(response.status());

		#[cfg(not(target_arch = "wasm32"))]
		{
			builder = builder.version(response.version());
		}

		for (name, value) in response.headers().iter() {
			builder = builder.header(name, value);
		}

		let response = builder
			.body(
				response
					.bytes()
					.await
					.map_err(Error::response)?
					.to_vec(),
			)
			.map_err(Error::response)?;

		log::trace!("HTTP response: {response:?}");

		Ok(response)
	}
}
